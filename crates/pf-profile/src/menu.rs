use std::fmt;

/// Every entry the profile screen lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    SavedPosts,
    MyParty,
    MyProfile,
    InterestSettings,
    ThemeToggle,
    Notices,
    ServiceInfo,
    Logout,
    DeleteAccount,
}

impl MenuAction {
    pub const ALL: [MenuAction; 9] = [
        Self::SavedPosts,
        Self::MyParty,
        Self::MyProfile,
        Self::InterestSettings,
        Self::ThemeToggle,
        Self::Notices,
        Self::ServiceInfo,
        Self::Logout,
        Self::DeleteAccount,
    ];

    /// Stable kebab-case name, used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SavedPosts => "saved-posts",
            Self::MyParty => "my-party",
            Self::MyProfile => "my-profile",
            Self::InterestSettings => "interest-settings",
            Self::ThemeToggle => "theme",
            Self::Notices => "notices",
            Self::ServiceInfo => "service-info",
            Self::Logout => "logout",
            Self::DeleteAccount => "delete-account",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.name() == name)
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub icon: Option<&'static str>,
    pub action: MenuAction,
}

impl MenuItem {
    const fn new(label: &'static str, icon: Option<&'static str>, action: MenuAction) -> Self {
        Self {
            label,
            icon,
            action,
        }
    }

    /// Entries rendered with warning styling.
    pub fn is_destructive(&self) -> bool {
        matches!(self.action, MenuAction::Logout | MenuAction::DeleteAccount)
    }
}

const MENU_ITEMS: [MenuItem; 3] = [
    MenuItem::new("저장한 글", Some("i_like_filled"), MenuAction::SavedPosts),
    MenuItem::new("나의 파티", Some("i_certificate"), MenuAction::MyParty),
    MenuItem::new("내 프로필", Some("i_profile_filled"), MenuAction::MyProfile),
];

const SETTING_ITEMS: [MenuItem; 6] = [
    MenuItem::new("관심분야 설정", None, MenuAction::InterestSettings),
    MenuItem::new("라이트&다크 모드", None, MenuAction::ThemeToggle),
    MenuItem::new("공지사항", None, MenuAction::Notices),
    MenuItem::new("서비스 정보", None, MenuAction::ServiceInfo),
    MenuItem::new("로그아웃", None, MenuAction::Logout),
    MenuItem::new("탈퇴하기", None, MenuAction::DeleteAccount),
];

/// Icon menu under the user card.
pub fn menu_items() -> &'static [MenuItem] {
    &MENU_ITEMS
}

/// Settings list at the bottom of the screen.
pub fn setting_items() -> &'static [MenuItem] {
    &SETTING_ITEMS
}
