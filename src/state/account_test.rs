use super::*;
use crate::net::types::Role;

fn form() -> AccountForm {
    AccountForm {
        username: "alice".to_owned(),
        email: "a@x.com".to_owned(),
        ..AccountForm::default()
    }
}

fn rejected(message: Option<&str>) -> ApiError {
    ApiError::Rejected {
        status: 409,
        message: message.map(str::to_owned),
    }
}

// =============================================================
// Profile sync
// =============================================================

#[test]
fn sync_from_copies_profile_fields() {
    let mut f = AccountForm::default();
    f.sync_from(&User {
        username: "bob".to_owned(),
        email: "b@x.com".to_owned(),
        role: Role::User,
    });
    assert_eq!(f.username, "bob");
    assert_eq!(f.email, "b@x.com");
}

#[test]
fn sync_from_leaves_password_fields_alone() {
    let mut f = AccountForm::default();
    f.new_password = "pw1".to_owned();
    f.sync_from(&User {
        username: "bob".to_owned(),
        email: "b@x.com".to_owned(),
        role: Role::User,
    });
    assert_eq!(f.new_password, "pw1");
}

// =============================================================
// Profile update outcomes
// =============================================================

#[test]
fn update_success_overwrites_profile_from_response() {
    let mut f = form();
    // The user kept editing while the request was in flight; the
    // server's answer wins.
    f.username = "alice-edited".to_owned();
    f.apply_update(Ok(AccountResponse {
        username: "alice".to_owned(),
        email: "alice@corp.example".to_owned(),
    }));
    assert_eq!(f.username, "alice");
    assert_eq!(f.email, "alice@corp.example");
}

#[test]
fn update_success_sets_success_message() {
    let mut f = form();
    f.apply_update(Ok(AccountResponse {
        username: "alice".to_owned(),
        email: "a@x.com".to_owned(),
    }));
    assert_eq!(
        f.update_status.success(),
        "Account information updated successfully!"
    );
    assert_eq!(f.update_status.error(), "");
}

#[test]
fn update_rejection_uses_server_message() {
    let mut f = form();
    f.update_status.set_success("stale");
    f.apply_update(Err(rejected(Some("duplicate email"))));
    assert_eq!(f.update_status.error(), "duplicate email");
    assert_eq!(f.update_status.success(), "");
}

#[test]
fn update_transport_failure_uses_transport_detail() {
    let mut f = form();
    f.apply_update(Err(ApiError::Transport("connection refused".to_owned())));
    assert_eq!(f.update_status.error(), "connection refused");
}

#[test]
fn update_rejection_without_message_falls_back_to_generic() {
    let mut f = form();
    f.apply_update(Err(rejected(None)));
    assert_eq!(f.update_status.error(), "Failed to update account");
}

#[test]
fn update_failure_keeps_local_profile_edits() {
    let mut f = form();
    f.username = "alice-edited".to_owned();
    f.apply_update(Err(rejected(Some("duplicate email"))));
    assert_eq!(f.username, "alice-edited");
}

// =============================================================
// Password change validation
// =============================================================

#[test]
fn password_mismatch_makes_no_request() {
    let mut f = form();
    f.new_password = "p1".to_owned();
    f.confirm_password = "p2".to_owned();
    assert!(f.begin_password_change().is_none());
    assert_eq!(f.password_status.error(), "Passwords do not match");
    assert_eq!(f.password_status.success(), "");
}

#[test]
fn matching_passwords_build_reset_request() {
    let mut f = form();
    f.new_password = "p1".to_owned();
    f.confirm_password = "p1".to_owned();
    let req = f.begin_password_change().unwrap();
    assert_eq!(req.email, "a@x.com");
    assert_eq!(req.new_password, "p1");
}

#[test]
fn current_password_is_never_part_of_the_request() {
    let mut f = form();
    f.current_password = "old".to_owned();
    f.new_password = "p1".to_owned();
    f.confirm_password = "p1".to_owned();
    let req = f.begin_password_change().unwrap();
    let json = serde_json::to_value(&req).unwrap();
    assert!(json.get("currentPassword").is_none());
}

#[test]
fn mismatch_does_not_touch_profile_status() {
    let mut f = form();
    f.update_status.set_success("profile saved");
    f.new_password = "p1".to_owned();
    f.confirm_password = "p2".to_owned();
    f.begin_password_change();
    assert_eq!(f.update_status.success(), "profile saved");
}

// =============================================================
// Password change outcomes
// =============================================================

#[test]
fn password_success_sets_message_and_clears_fields() {
    let mut f = form();
    f.current_password = "old".to_owned();
    f.new_password = "p1".to_owned();
    f.confirm_password = "p1".to_owned();
    f.apply_password_change(Ok(()));
    assert_eq!(f.password_status.success(), "Password changed successfully!");
    assert_eq!(f.current_password, "");
    assert_eq!(f.new_password, "");
    assert_eq!(f.confirm_password, "");
}

#[test]
fn password_failure_reports_generic_message() {
    let mut f = form();
    f.apply_password_change(Err(rejected(Some("token expired"))));
    // No server detail is surfaced on this path.
    assert_eq!(f.password_status.error(), "Failed to change password");
    assert_eq!(f.password_status.success(), "");
}

#[test]
fn password_failure_keeps_typed_fields() {
    let mut f = form();
    f.new_password = "p1".to_owned();
    f.confirm_password = "p1".to_owned();
    f.apply_password_change(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(f.new_password, "p1");
}

#[test]
fn retry_after_failure_clears_previous_error() {
    let mut f = form();
    f.apply_password_change(Err(ApiError::Transport("offline".to_owned())));
    f.apply_password_change(Ok(()));
    assert_eq!(f.password_status.error(), "");
    assert_eq!(f.password_status.success(), "Password changed successfully!");
}
