//! Input validation for task and user payloads.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::errors::store_error::{Result, StoreError};
use crate::structs::task::{CreateTaskInput, UpdateTaskInput};
use crate::structs::user::{CreateUserInput, UpdateUserInput};

const TITLE_MAX_CHARS: usize = 200;
const NAME_MAX_CHARS: usize = 100;
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN));

pub fn validate_create_task(input: &CreateTaskInput) -> Result<()> {
    check_title(&input.title)
}

pub fn validate_update_task(input: &UpdateTaskInput) -> Result<()> {
    match &input.title {
        Some(title) => check_title(title),
        None => Ok(()),
    }
}

pub fn validate_create_user(input: &CreateUserInput) -> Result<()> {
    check_email(&input.email)?;
    check_name(&input.name)?;
    check_avatar(input.avatar.as_deref())
}

pub fn validate_update_user(input: &UpdateUserInput) -> Result<()> {
    if let Some(email) = &input.email {
        check_email(email)?;
    }
    if let Some(name) = &input.name {
        check_name(name)?;
    }
    check_avatar(input.avatar.as_deref())
}

fn check_title(title: &str) -> Result<()> {
    check_length("title", title, TITLE_MAX_CHARS, "Title is required")
}

fn check_name(name: &str) -> Result<()> {
    check_length("name", name, NAME_MAX_CHARS, "Name is required")
}

fn check_length(field: &'static str, value: &str, max: usize, required: &str) -> Result<()> {
    let len = value.chars().count();
    if len == 0 {
        return Err(StoreError::validation(field, required));
    }
    if len > max {
        return Err(StoreError::validation(
            field,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(())
}

fn check_email(email: &str) -> Result<()> {
    check_email_against(&EMAIL_RE, email)
}

fn check_email_against(
    pattern: &std::result::Result<Regex, regex::Error>,
    email: &str,
) -> Result<()> {
    let re = pattern.as_ref().map_err(|e| StoreError::Pattern(e.clone()))?;
    if re.is_match(email) {
        Ok(())
    } else {
        Err(StoreError::validation("email", "Invalid email"))
    }
}

/// Empty string is allowed and means "no avatar".
fn check_avatar(avatar: Option<&str>) -> Result<()> {
    match avatar {
        None | Some("") => Ok(()),
        Some(raw) => Url::parse(raw)
            .map(|_| ())
            .map_err(|e| StoreError::validation("avatar", format!("Invalid url: {e}"))),
    }
}
