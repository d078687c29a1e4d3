pub mod complete_onboarding;
pub mod get_me;
pub mod update_profile;
