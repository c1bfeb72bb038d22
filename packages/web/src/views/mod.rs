mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod nav;
pub use nav::SiteNav;

mod profile;
pub use profile::Profile;

mod settings;
pub use settings::Settings;
