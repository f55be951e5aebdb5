//! Auth and end-user endpoints

use reqwest::multipart::{Form, Part};
use shared::client::{ApiMessage, LoginRequest, RegisterRequest, VerifyOtpRequest};
use shared::models::{Principal, Request, RequestCreate, User, UserUpdate, MAX_REQUEST_PHOTOS};
use shared::report::StatusSummary;

use crate::{ClientError, ClientResult, HttpClient};

/// An in-memory photo to attach to a multipart upload
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    fn into_part(self) -> Part {
        Part::bytes(self.bytes).file_name(self.file_name)
    }
}

/// Auth API group (`/api/auth`)
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    http: &'a HttpClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Register a new end user. The account starts unverified; the backend
    /// emails an OTP for [`Self::verify_otp`].
    pub async fn register(&self, payload: &RegisterRequest) -> ClientResult<User> {
        self.http.post("api/auth/register", payload).await
    }

    /// Login with email and password, resolving the role into a [`Principal`].
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Principal> {
        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let user: User = self.http.post("api/auth/login", &payload).await?;
        Ok(Principal::from_user(&user))
    }

    /// Confirm the emailed one-time code after registration.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> ClientResult<ApiMessage> {
        let payload = VerifyOtpRequest {
            email: email.to_string(),
            otp: otp.to_string(),
        };
        self.http.post("api/auth/verify-otp", &payload).await
    }

    /// Fetch a user's profile.
    pub async fn user(&self, id: i64) -> ClientResult<User> {
        self.http.get(&format!("api/auth/user/{id}")).await
    }

    /// Update a user's own profile.
    pub async fn update_user(&self, id: i64, payload: &UserUpdate) -> ClientResult<User> {
        self.http.put(&format!("api/auth/user/{id}"), payload).await
    }

    /// Count-by-status stats for the user's dashboard and certificate gate.
    pub async fn user_stats(&self, id: i64) -> ClientResult<StatusSummary> {
        self.http.get(&format!("api/auth/user/{id}/stats")).await
    }

    /// All requests submitted by the user.
    pub async fn user_requests(&self, id: i64) -> ClientResult<Vec<Request>> {
        self.http.get(&format!("api/auth/user/{id}/requests")).await
    }

    /// Fetch a single request by id.
    pub async fn request(&self, id: i64) -> ClientResult<Request> {
        self.http.get(&format!("api/auth/request/{id}")).await
    }

    /// Submit a new pickup request with photos (multipart).
    ///
    /// Between one and [`MAX_REQUEST_PHOTOS`] photos are required; the check
    /// runs before anything is sent. The created request comes back PENDING.
    pub async fn submit_request(
        &self,
        user_id: i64,
        details: &RequestCreate,
        photos: Vec<PhotoUpload>,
    ) -> ClientResult<Request> {
        if photos.is_empty() {
            return Err(ClientError::Validation(
                "at least one photo must be uploaded for the request".to_string(),
            ));
        }
        if photos.len() > MAX_REQUEST_PHOTOS {
            return Err(ClientError::Validation(format!(
                "at most {MAX_REQUEST_PHOTOS} photos may be uploaded, got {}",
                photos.len()
            )));
        }

        let mut form = Form::new().text("type", details.category.clone());
        if let Some(description) = &details.description {
            form = form.text("description", description.clone());
        }
        if let Some(location) = &details.pickup_location {
            form = form.text("pickupLocation", location.clone());
        }
        if let Some(brand_model) = &details.brand_model {
            form = form.text("brandModel", brand_model.clone());
        }
        if let Some(condition) = &details.condition {
            form = form.text("condition", condition.clone());
        }
        if let Some(quantity) = details.quantity {
            form = form.text("quantity", quantity.to_string());
        }
        if let Some(remarks) = &details.remarks {
            form = form.text("remarks", remarks.clone());
        }
        for photo in photos {
            form = form.part("files", photo.into_part());
        }

        self.http
            .post_multipart(&format!("api/auth/user/{user_id}/request"), form)
            .await
    }

    /// Upload or replace the user's profile picture.
    pub async fn upload_profile_picture(
        &self,
        user_id: i64,
        photo: PhotoUpload,
    ) -> ClientResult<User> {
        let form = Form::new().part("file", photo.into_part());
        self.http
            .post_multipart(&format!("api/auth/user/{user_id}/profile-picture"), form)
            .await
    }
}
