use super::*;

fn form() -> RegisterForm {
    RegisterForm {
        username: "alice".to_owned(),
        email: "a@x.com".to_owned(),
        password: "pw1".to_owned(),
        ..RegisterForm::default()
    }
}

// =============================================================
// Request body
// =============================================================

#[test]
fn request_carries_all_fields() {
    let req = form().request();
    assert_eq!(req.username, "alice");
    assert_eq!(req.email, "a@x.com");
    assert_eq!(req.password, "pw1");
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn success_sets_redirect_message() {
    let mut f = form();
    f.apply(Ok(()));
    assert_eq!(
        f.status.success(),
        "Registration successful! Redirecting to login..."
    );
    assert_eq!(f.status.error(), "");
}

#[test]
fn success_leaves_fields_in_place() {
    let mut f = form();
    f.apply(Ok(()));
    assert_eq!(f.username, "alice");
    assert_eq!(f.password, "pw1");
}

#[test]
fn rejection_shows_server_message() {
    let mut f = form();
    f.apply(Err(ApiError::Rejected {
        status: 409,
        message: Some("Username already taken".to_owned()),
    }));
    assert_eq!(f.status.error(), "Username already taken");
    assert_eq!(f.status.success(), "");
}

#[test]
fn rejection_without_message_falls_back() {
    let mut f = form();
    f.apply(Err(ApiError::Rejected {
        status: 500,
        message: None,
    }));
    assert_eq!(f.status.error(), "Registration failed");
}

#[test]
fn transport_failure_falls_back() {
    let mut f = form();
    f.apply(Err(ApiError::Transport("connection refused".to_owned())));
    assert_eq!(f.status.error(), "Registration failed");
}

#[test]
fn resubmit_after_failure_clears_previous_error() {
    let mut f = form();
    f.apply(Err(ApiError::Rejected {
        status: 409,
        message: Some("Username already taken".to_owned()),
    }));
    f.apply(Ok(()));
    assert_eq!(f.status.error(), "");
    assert_eq!(
        f.status.success(),
        "Registration successful! Redirecting to login..."
    );
}
