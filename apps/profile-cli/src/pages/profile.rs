//! Customer profile page.

use std::fmt;

use entities::User;

use super::{contact_block, heading, initials};

/// Read-only view of a customer profile.
#[derive(Debug, Clone, Copy)]
pub struct CustomerProfileView<'a> {
    user: &'a User,
}

impl<'a> CustomerProfileView<'a> {
    pub fn new(user: &'a User) -> Self {
        Self { user }
    }
}

impl fmt::Display for CustomerProfileView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.user.display_name();

        writeln!(f, "Profile")?;
        writeln!(f, "[{}] {name}  (Verified Customer)", initials(name))?;
        if let Some(picture) = &self.user.profile.profile_picture {
            writeln!(f, "Avatar: {picture}")?;
        }

        heading(f, "Personal Information")?;
        contact_block(f, self.user)?;

        writeln!(f)?;
        write!(f, "Run `workerconnect edit --help` to update your profile.")
    }
}

#[cfg(test)]
mod tests {
    use entities::CommonProfile;

    use super::*;
    use crate::pages::NOT_PROVIDED;

    #[test]
    fn test_renders_customer() {
        let user = User::customer("admin").with_profile(CommonProfile {
            name: Some("Sharath Kumar".to_string()),
            phone: Some("+91 9876543210".to_string()),
            location: Some("Hyderabad".to_string()),
            ..Default::default()
        });

        let text = CustomerProfileView::new(&user).to_string();

        assert!(text.contains("[SK] Sharath Kumar  (Verified Customer)"));
        assert!(text.contains("+91 9876543210"));
        assert!(text.contains("Hyderabad"));
        assert!(text.contains(&format!("Date of Birth    {NOT_PROVIDED}")));
        assert!(!text.contains("Worker ID"));
    }

    #[test]
    fn test_nameless_customer_uses_email() {
        let user = User::customer("admin");
        let text = CustomerProfileView::new(&user).to_string();

        assert!(text.contains("[a] admin"));
    }
}
