//! Form overlay state shared by the create and edit flows.

use std::str::FromStr;

use shared::{
    domain::UserId,
    protocol::{User, UserPayload},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Id,
    FirstName,
    LastName,
    Email,
    Department,
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().replace(['_', '-'], "").as_str() {
            "id" | "userid" => Ok(Self::Id),
            "firstname" | "first" => Ok(Self::FirstName),
            "lastname" | "last" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "department" | "dept" => Ok(Self::Department),
            _ => Err(format!("unknown form field '{raw}'")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl FormFields {
    /// Fills every field from a fetched record.
    ///
    /// Records that only carry a combined `name` are split at the first
    /// whitespace into first and last name.
    pub fn from_user(user: &User) -> Self {
        let (first_name, last_name) =
            if user.first_name.is_empty() && user.last_name.is_empty() {
                match user.name.trim().split_once(char::is_whitespace) {
                    Some((first, last)) => (first.to_string(), last.trim().to_string()),
                    None => (user.name.trim().to_string(), String::new()),
                }
            } else {
                (user.first_name.clone(), user.last_name.clone())
            };

        Self {
            id: user
                .id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            first_name,
            last_name,
            email: user.email.clone(),
            department: user.department.clone(),
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Id => self.id = value,
            FormField::FirstName => self.first_name = value,
            FormField::LastName => self.last_name = value,
            FormField::Email => self.email = value,
            FormField::Department => self.department = value,
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        UserId::parse(&self.id)
    }

    /// `None` when any of the four editable fields is empty.
    pub fn to_payload(&self) -> Option<UserPayload> {
        let editable = [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.department,
        ];
        if editable.iter().any(|value| value.is_empty()) {
            return None;
        }

        Some(UserPayload {
            id: self.user_id(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

impl FormMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Create => "Add New User",
            Self::Edit => "Edit User",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub visible: bool,
    pub mode: FormMode,
    pub fields: FormFields,
}

impl FormState {
    pub fn open(mode: FormMode, fields: FormFields) -> Self {
        Self {
            visible: true,
            mode,
            fields,
        }
    }

    pub fn title(&self) -> &'static str {
        self.mode.title()
    }
}
