use crate::{
    model::auth::{LoginDto, RegisterDto},
    server::{
        data::pilot::PilotRepository,
        error::{auth::AuthError, AppError},
        model::pilot::PilotStatus,
        service::{admin::code::AdminCodeService, auth::AuthService},
        util::password::{hash_password, verify_password},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod login;
mod password;
mod register;

fn register_dto(callsign: &str, email: &str) -> RegisterDto {
    RegisterDto {
        first_name: "yousef".to_string(),
        last_name: "HADDAD".to_string(),
        email: email.to_string(),
        password: "correct-horse".to_string(),
        callsign: callsign.to_string(),
        base: "OJAI".to_string(),
    }
}

fn login_dto(email: &str, password: &str) -> LoginDto {
    LoginDto {
        email: email.to_string(),
        password: password.to_string(),
        hwid: None,
        admin_code: None,
    }
}
