//! Local presence checks
//!
//! Everything here runs before any network contact; a failure
//! produces the exact notice shown to the user.

use crate::error::{Error, Result};
use crate::types::{AgrovetRegistration, ExtensionWorkerRegistration, SignupRequest};

/// An empty batch never reaches the backend.
pub fn batch_non_empty(file_count: usize) -> Result<()> {
    if file_count == 0 {
        return Err(Error::Validation(
            "Please select at least one image.".to_string(),
        ));
    }
    Ok(())
}

fn require(label: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{} is required.", label)));
    }
    Ok(())
}

pub fn login_fields(email: &str, password: &str) -> Result<()> {
    require("Email", email)?;
    require("Password", password)
}

pub fn signup_fields(request: &SignupRequest) -> Result<()> {
    require("First name", &request.first_name)?;
    require("Last name", &request.last_name)?;
    require("Username", &request.username)?;
    require("Email", &request.email)?;
    require("Password", &request.password)
}

pub fn agrovet_fields(registration: &AgrovetRegistration) -> Result<()> {
    require("Name", &registration.name)?;
    require("County", &registration.county)?;
    require("Town", &registration.town)?;
    require("Contact", &registration.contact)
}

pub fn extension_worker_fields(registration: &ExtensionWorkerRegistration) -> Result<()> {
    require("First name", &registration.first_name)?;
    require("Last name", &registration.last_name)?;
    if registration.services.iter().all(|s| s.trim().is_empty()) {
        return Err(Error::Validation(
            "At least one service is required.".to_string(),
        ));
    }
    require("County", &registration.county)?;
    require("Town", &registration.town)?;
    require("Contact", &registration.contact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_non_empty() {
        let err = batch_non_empty(0).unwrap_err();
        assert_eq!(format!("{}", err), "Please select at least one image.");
        assert!(batch_non_empty(1).is_ok());
        assert!(batch_non_empty(12).is_ok());
    }

    #[test]
    fn test_login_fields() {
        assert!(login_fields("a@b.com", "pw").is_ok());
        assert!(login_fields("", "pw").is_err());
        assert!(login_fields("a@b.com", "   ").is_err());
    }

    #[test]
    fn test_signup_fields_reports_first_missing_field() {
        let mut request = SignupRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "pw".to_string(),
        };
        assert!(signup_fields(&request).is_ok());

        request.username = String::new();
        let err = signup_fields(&request).unwrap_err();
        assert_eq!(format!("{}", err), "Username is required.");
    }

    #[test]
    fn test_agrovet_fields() {
        let registration = AgrovetRegistration {
            name: "Mkulima Agrovet".to_string(),
            county: "Nakuru".to_string(),
            town: "Naivasha".to_string(),
            contact: "0700000000".to_string(),
        };
        assert!(agrovet_fields(&registration).is_ok());

        let missing_town = AgrovetRegistration {
            town: String::new(),
            ..registration
        };
        assert!(agrovet_fields(&missing_town).is_err());
    }

    #[test]
    fn test_extension_worker_requires_a_service() {
        let mut registration = ExtensionWorkerRegistration {
            first_name: "John".to_string(),
            last_name: "Mwangi".to_string(),
            services: vec!["scouting".to_string()],
            county: "Nakuru".to_string(),
            town: "Naivasha".to_string(),
            contact: "0700000000".to_string(),
        };
        assert!(extension_worker_fields(&registration).is_ok());

        registration.services = vec![String::new()];
        let err = extension_worker_fields(&registration).unwrap_err();
        assert_eq!(format!("{}", err), "At least one service is required.");
    }
}
