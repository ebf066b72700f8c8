//! The account holder's profile and the people they send money to most often.

/// The details shown on the settings page and in the header avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

/// The signed in account holder.
pub const PROFILE: Profile = Profile {
    name: "Alexey Smirnov",
    phone: "+7 999 123-45-67",
    email: "alexey@cyberbank.ru",
};

/// Someone listed for quick transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub name: &'static str,
    pub phone: &'static str,
}

/// The contacts shown under "Frequent contacts" on the transfers page.
pub const FREQUENT_CONTACTS: [Contact; 2] = [
    Contact {
        name: "Alexey S.",
        phone: "+7 999 123-45-67",
    },
    Contact {
        name: "Maria K.",
        phone: "+7 999 765-43-21",
    },
];
