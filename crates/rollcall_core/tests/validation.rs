use rollcall_core::{validate, Field, StudentDraft};

fn valid_draft() -> StudentDraft {
    let mut draft = StudentDraft::default();
    draft.set(Field::FirstName, "Ann");
    draft.set(Field::LastName, "Lee");
    draft.set(Field::Gender, "female");
    draft.set(Field::DateOfBirth, "1990-01-01");
    draft.set(Field::Email, "ann@x.com");
    draft
}

#[test]
fn well_formed_draft_produces_empty_mapping() {
    let errors = validate(&valid_draft());
    assert!(errors.is_empty());
    assert_eq!(errors.len(), 0);
}

#[test]
fn each_missing_required_field_is_reported() {
    for field in Field::all() {
        let mut draft = valid_draft();
        draft.set(*field, "");
        let errors = validate(&draft);
        assert!(
            errors.get(*field).is_some(),
            "clearing {field} should report {field}"
        );
        assert_eq!(errors.len(), 1);
    }
}

#[test]
fn empty_draft_reports_every_field_as_required() {
    let errors = validate(&StudentDraft::default());
    assert_eq!(errors.len(), Field::all().len());
    assert_eq!(errors.get(Field::FirstName), Some("First name is required"));
    assert_eq!(errors.get(Field::LastName), Some("Last name is required"));
    assert_eq!(errors.get(Field::Gender), Some("Gender is required"));
    assert_eq!(
        errors.get(Field::DateOfBirth),
        Some("Date of Birth is required")
    );
    assert_eq!(errors.get(Field::Email), Some("Email is required"));
}

#[test]
fn validation_is_idempotent() {
    let mut draft = valid_draft();
    draft.set(Field::DateOfBirth, "1990-1-1");
    draft.set(Field::FirstName, "4nn");

    let first = validate(&draft);
    let second = validate(&draft);
    assert_eq!(first, second);
}

#[test]
fn short_dob_shape_is_rejected_with_the_format_message() {
    let mut draft = valid_draft();
    draft.set(Field::DateOfBirth, "1990-1-1");

    let errors = validate(&draft);
    assert_eq!(
        errors.get(Field::DateOfBirth),
        Some("Invalid DOB format (YYYY-MM-DD)")
    );
    assert_eq!(errors.len(), 1);
}

#[test]
fn names_with_spaces_pass_and_leading_non_letters_fail() {
    let mut draft = valid_draft();
    draft.set(Field::FirstName, "Mary Jane");
    assert!(validate(&draft).is_empty());

    draft.set(Field::FirstName, " Ann");
    assert_eq!(
        validate(&draft).get(Field::FirstName),
        Some("First name must start with a letter")
    );

    draft.set(Field::FirstName, "-Ann");
    assert!(validate(&draft).get(Field::FirstName).is_some());
}

#[test]
fn loose_email_shape_needs_at_then_dot() {
    let mut draft = valid_draft();
    for bad in ["ann", "ann@x", "@x.com", "ann@.x@"] {
        draft.set(Field::Email, bad);
        assert_eq!(
            validate(&draft).get(Field::Email),
            Some("Invalid email format"),
            "`{bad}` should be rejected"
        );
    }

    // Unanchored shape check: extra surrounding text is tolerated.
    draft.set(Field::Email, "ann lee@x.com");
    assert!(validate(&draft).is_empty());
}
