//! User-visible texts. Each workflow outcome maps to exactly one of these.

pub const AVATAR_UPDATED: &str = "프로필 이미지가 업데이트되었습니다.";
pub const AVATAR_LOAD_FAILED: &str = "이미지 로드에 실패했습니다.";
pub const AVATAR_UPLOAD_FAILED: &str = "이미지 업로드에 실패했습니다.";

pub const ACCOUNT_DELETED: &str = "계정이 성공적으로 삭제되었습니다.";
pub const ACCOUNT_DELETE_FAILED: &str = "계정 삭제 중 오류가 발생했습니다. 다시 시도해주세요.";

pub const LOGGED_OUT: &str = "로그아웃되었습니다.";

// Deletion confirmation modal
pub const DELETE_MODAL_TITLE: &str = "계정 탈퇴";
pub const DELETE_MODAL_DESCRIPTION: &str = "정말로 탈퇴하시겠습니까? 이 작업은 되돌릴 수 없습니다.";
pub const DELETE_MODAL_CONFIRM: &str = "탈퇴하기";
pub const DELETE_MODAL_CANCEL: &str = "취소";
