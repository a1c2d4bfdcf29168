use rollcall_core::{Gender, Student};
use serde_json::json;

#[test]
fn student_serializes_with_snake_case_fields() {
    let student = Student {
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        gender: Gender::Female,
        date_of_birth: "1990-01-01".to_string(),
        email: "ann@x.com".to_string(),
    };

    let value = serde_json::to_value(&student).expect("student should serialize");
    assert_eq!(
        value,
        json!({
            "first_name": "Ann",
            "last_name": "Lee",
            "gender": "female",
            "date_of_birth": "1990-01-01",
            "email": "ann@x.com",
        })
    );
}

#[test]
fn student_roundtrips_through_json() {
    let student = Student {
        first_name: "Bob".to_string(),
        last_name: "Ray".to_string(),
        gender: Gender::Male,
        date_of_birth: "1985-12-31".to_string(),
        email: "bob@ray.org".to_string(),
    };

    let encoded = serde_json::to_string(&student).expect("student should serialize");
    let decoded: Student = serde_json::from_str(&encoded).expect("student should deserialize");
    assert_eq!(decoded, student);
}
