pub mod about;
pub mod fonts;
pub mod menu;
pub mod modal;
pub mod pair_view;
pub mod prompts;
pub mod settings;
pub mod status_bar;
pub mod toast;
pub mod verdict;
