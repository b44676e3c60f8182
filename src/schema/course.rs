use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::course::Course;

/// Per-field validation errors, serialized as `{"field": ["message", ...]}`.
pub type FieldErrors = BTreeMap<&'static str, Vec<String>>;

/// Incoming course payload for create and update. There is no `teacher`
/// field in this shape: whatever a client sends for it is dropped during
/// deserialization, the owner always comes from the authenticated request.
#[derive(Debug, Deserialize)]
pub struct CourseInput{
    pub name: Option<String>,
    pub introduction: Option<String>,
    pub price: Option<Decimal>,
}

/// The checked counterpart of [`CourseInput`].
#[derive(Debug)]
pub struct ValidCourseFields{
    pub name: String,
    pub introduction: Option<String>,
    pub price: Decimal,
}

impl CourseInput{
    pub fn validate(&self) -> Result<ValidCourseFields, FieldErrors>{
        let mut errors = FieldErrors::new();

        let name = match &self.name {
            None => {
                errors.entry("name").or_default().push(String::from("This field is required."));
                None
            }
            Some(name) if name.trim().is_empty() => {
                errors.entry("name").or_default().push(String::from("This field may not be blank."));
                None
            }
            Some(name) => Some(name.clone()),
        };

        let price = match self.price {
            None => {
                errors.entry("price").or_default().push(String::from("This field is required."));
                None
            }
            Some(price) if price.is_sign_negative() => {
                errors.entry("price").or_default().push(String::from("Ensure this value is greater than or equal to 0."));
                None
            }
            Some(price) => Some(price),
        };

        match (name, price) {
            (Some(name), Some(price)) if errors.is_empty() => Ok(ValidCourseFields{
                name,
                introduction: self.introduction.clone(),
                price,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CourseResponse{
    pub id: String,
    pub name: String,
    pub introduction: Option<String>,
    pub teacher: String,
    pub price: Decimal,
}

impl From<Course> for CourseResponse{
    fn from(course: Course) -> Self{
        CourseResponse{
            id: course.id.to_string(),
            name: course.name,
            introduction: course.introduction,
            teacher: course.teacher_id.to_string(),
            price: course.price,
        }
    }
}

#[cfg(test)]
mod tests{
    use super::*;

    fn input(name: Option<&str>, price: Option<&str>) -> CourseInput{
        CourseInput{
            name: name.map(String::from),
            introduction: None,
            price: price.map(|p| p.parse().unwrap()),
        }
    }

    #[test]
    fn accepts_a_complete_payload(){
        let fields = input(Some("Algorithms"), Some("49.99")).validate().unwrap();
        assert_eq!(fields.name, "Algorithms");
        assert_eq!(fields.price.to_string(), "49.99");
    }

    #[test]
    fn rejects_missing_name_and_price(){
        let errors = input(None, None).validate().unwrap_err();
        assert_eq!(errors["name"], vec!["This field is required."]);
        assert_eq!(errors["price"], vec!["This field is required."]);
    }

    #[test]
    fn rejects_blank_name(){
        let errors = input(Some("   "), Some("10")).validate().unwrap_err();
        assert_eq!(errors["name"], vec!["This field may not be blank."]);
        assert!(!errors.contains_key("price"));
    }

    #[test]
    fn rejects_negative_price(){
        let errors = input(Some("Algorithms"), Some("-1")).validate().unwrap_err();
        assert_eq!(errors["price"], vec!["Ensure this value is greater than or equal to 0."]);
    }

    #[test]
    fn zero_price_is_allowed(){
        assert!(input(Some("Algorithms"), Some("0")).validate().is_ok());
    }
}
