use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::{redis, Pool};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

async fn database_status(db: &DatabaseConnection) -> &'static str {
    match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Database readiness check failed");
            "unhealthy"
        }
    }
}

async fn redis_status(pool: &Pool) -> &'static str {
    let mut conn = match pool.get().await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::warn!(error = %e, "Redis readiness check failed");
            return "unhealthy";
        }
    };

    match redis::cmd("PING").query_async::<String>(&mut *conn).await {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Redis readiness check failed");
            "unhealthy"
        }
    }
}

/// READINESS PROBE
/// - Postgres answers `SELECT 1`
/// - Redis answers `PING` (rate limiting and chat history depend on it)
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis: web::Data<Arc<Pool>>,
) -> impl Responder {
    let (database, redis) = tokio::join!(database_status(&db), redis_status(&redis));

    let body = if database == "ok" && redis == "ok" {
        ReadinessResponse {
            status: "ok",
            database,
            redis,
        }
    } else {
        ReadinessResponse {
            status: "unhealthy",
            database,
            redis,
        }
    };

    if body.status == "ok" {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
