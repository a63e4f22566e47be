use actix_web::{web, HttpResponse};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::portfolio::application::domain::entities::{
    Certification, Education, Experience, OtherLink, Project, Skill,
};
use crate::portfolio::application::ports::incoming::use_cases::{
    ManageContentError, ManageContentUseCase,
};
use crate::portfolio::application::ports::outgoing::ContentRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// A record type exposed through the admin CRUD endpoints.
pub trait AdminContent: ContentRecord {
    /// Collection path under `/admin/api`, e.g. `projects`.
    const COLLECTION: &'static str;

    fn use_case(state: &AppState) -> &Arc<dyn ManageContentUseCase<Self> + Send + Sync>;
}

impl AdminContent for Project {
    const COLLECTION: &'static str = "projects";

    fn use_case(state: &AppState) -> &Arc<dyn ManageContentUseCase<Self> + Send + Sync> {
        &state.portfolio.projects
    }
}

impl AdminContent for Skill {
    const COLLECTION: &'static str = "skills";

    fn use_case(state: &AppState) -> &Arc<dyn ManageContentUseCase<Self> + Send + Sync> {
        &state.portfolio.skills
    }
}

impl AdminContent for Experience {
    const COLLECTION: &'static str = "experiences";

    fn use_case(state: &AppState) -> &Arc<dyn ManageContentUseCase<Self> + Send + Sync> {
        &state.portfolio.experiences
    }
}

impl AdminContent for Education {
    const COLLECTION: &'static str = "educations";

    fn use_case(state: &AppState) -> &Arc<dyn ManageContentUseCase<Self> + Send + Sync> {
        &state.portfolio.educations
    }
}

impl AdminContent for Certification {
    const COLLECTION: &'static str = "certifications";

    fn use_case(state: &AppState) -> &Arc<dyn ManageContentUseCase<Self> + Send + Sync> {
        &state.portfolio.certifications
    }
}

impl AdminContent for OtherLink {
    const COLLECTION: &'static str = "links";

    fn use_case(state: &AppState) -> &Arc<dyn ManageContentUseCase<Self> + Send + Sync> {
        &state.portfolio.links
    }
}

/// Mounts list/create and get/update/delete for every admin record type.
pub fn configure_admin_content(cfg: &mut web::ServiceConfig) {
    register::<Project>(cfg);
    register::<Skill>(cfg);
    register::<Experience>(cfg);
    register::<Education>(cfg);
    register::<Certification>(cfg);
    register::<OtherLink>(cfg);
}

fn register<C: AdminContent>(cfg: &mut web::ServiceConfig) {
    let collection = format!("/admin/api/{}", C::COLLECTION);

    cfg.service(
        web::resource(collection.as_str())
            .route(web::get().to(list_content::<C>))
            .route(web::post().to(create_content::<C>)),
    )
    .service(
        web::resource(format!("{collection}/{{id}}"))
            .route(web::get().to(get_content::<C>))
            .route(web::put().to(update_content::<C>))
            .route(web::delete().to(delete_content::<C>)),
    );
}

fn content_error<C: AdminContent>(err: ManageContentError) -> HttpResponse {
    match err {
        ManageContentError::Validation(e) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        ManageContentError::NotFound => {
            ApiResponse::not_found("NOT_FOUND", &format!("The {} does not exist", C::KIND))
        }
        ManageContentError::RepositoryError(ref e) => {
            error!(kind = C::KIND, error = %e, "Content repository failure");
            ApiResponse::internal_error()
        }
    }
}

async fn list_content<C: AdminContent>(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> HttpResponse {
    match C::use_case(&data).list().await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => content_error::<C>(e),
    }
}

async fn get_content<C: AdminContent>(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match C::use_case(&data).get(path.into_inner()).await {
        Ok(item) => ApiResponse::success(item),
        Err(e) => content_error::<C>(e),
    }
}

async fn create_content<C: AdminContent>(
    admin: AdminUser,
    payload: web::Json<C::Draft>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match C::use_case(&data).create(payload.into_inner()).await {
        Ok(item) => {
            info!(admin = %admin.username, kind = C::KIND, id = %item.id(), "Admin created content");
            ApiResponse::created(item)
        }
        Err(e) => content_error::<C>(e),
    }
}

async fn update_content<C: AdminContent>(
    admin: AdminUser,
    path: web::Path<Uuid>,
    payload: web::Json<C::Draft>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();

    match C::use_case(&data).update(id, payload.into_inner()).await {
        Ok(item) => {
            info!(admin = %admin.username, kind = C::KIND, id = %id, "Admin updated content");
            ApiResponse::success(item)
        }
        Err(e) => content_error::<C>(e),
    }
}

async fn delete_content<C: AdminContent>(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();

    match C::use_case(&data).delete(id).await {
        Ok(()) => {
            info!(admin = %admin.username, kind = C::KIND, id = %id, "Admin deleted content");
            ApiResponse::no_content()
        }
        Err(e) => content_error::<C>(e),
    }
}
