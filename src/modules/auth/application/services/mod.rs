mod login_admin_service;

pub use login_admin_service::LoginAdminService;
