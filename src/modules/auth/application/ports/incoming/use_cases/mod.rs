mod login_admin;

pub use login_admin::{
    LoginAdminError, LoginAdminRequest, LoginAdminResponse, LoginAdminUseCase, LoginRequestError,
};
