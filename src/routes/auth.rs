use actix_web::{http::header, web, HttpRequest, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, LoginRequest, LogoutResponse, SignupRequest};
use crate::routes::AppState;
use crate::services::ProviderError;

/// Configure auth routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/login", web::post().to(login))
        .route("/signup", web::post().to(signup))
        .route("/logout", web::post().to(logout));
}

/// Login endpoint
///
/// POST /api/v1/auth/login
///
/// Relays the provider session object on success.
async fn login(state: web::Data<AppState>, req: web::Json<LoginRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state.auth.login(&req.email, &req.password).await {
        Ok(session) => HttpResponse::Ok().json(session),
        Err(e) => provider_failed(e),
    }
}

/// Signup endpoint
///
/// POST /api/v1/auth/signup
async fn signup(state: web::Data<AppState>, req: web::Json<SignupRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state.auth.signup(&req.email, &req.password).await {
        Ok(session) => HttpResponse::Ok().json(session),
        Err(e) => provider_failed(e),
    }
}

/// Logout endpoint
///
/// POST /api/v1/auth/logout
///
/// The caller's `Authorization: Bearer <token>` header, when present, names
/// the session to revoke.
async fn logout(state: web::Data<AppState>, http_req: HttpRequest) -> impl Responder {
    let token = bearer_token(&http_req);

    match state.auth.logout(token.as_deref()).await {
        Ok(()) => HttpResponse::Ok().json(LogoutResponse { success: true }),
        Err(e) => provider_failed(e),
    }
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Provider faults are the caller's to act on, so they surface as 400
fn provider_failed(e: ProviderError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Authentication failed".to_string(),
        message: e.to_string(),
        status_code: 400,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_bearer_token_extraction() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer abc.def"))
            .to_http_request();
        assert_eq!(bearer_token(&req), Some("abc.def".to_string()));

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Basic Zm9vOmJhcg=="))
            .to_http_request();
        assert_eq!(bearer_token(&req), None);

        let req = TestRequest::default().to_http_request();
        assert_eq!(bearer_token(&req), None);
    }

    #[test]
    fn test_provider_error_carries_message() {
        let response = provider_failed(ProviderError::ApiError {
            status: 400,
            message: "Invalid login credentials".to_string(),
        });
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
