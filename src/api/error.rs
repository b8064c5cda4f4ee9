use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::{models::ApiError, services::gateway::GatewayError};

impl ResponseError for GatewayError {
	fn status_code(&self) -> StatusCode {
		StatusCode::INTERNAL_SERVER_ERROR
	}

	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code()).json(ApiError::from(self))
	}
}
