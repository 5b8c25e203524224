use actix_web::body::BoxBody;
use actix_web::http::header::{CACHE_CONTROL, ContentType, HeaderName, HeaderValue, VARY};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, HttpResponseBuilder};
use serde::Serialize;
use admin_gate_endpoint_model::{AdminAreaError, AdminAreaResult, AuthStatusResponse};

type Pair = (HeaderName, HeaderValueUpdateMethod);

pub trait IntoPlainText {
    fn into_plain_text(self) -> String;
}

pub trait ContainsHeaderMap {
    type Iterator: Iterator<Item = Pair>;

    fn response_headers(&self) -> Self::Iterator;
}

#[derive(Eq, PartialEq)]
pub enum HeaderValueUpdateMethod {
    Overwrite(HeaderValue),
    Append(HeaderValue),
}

pub trait HttpStatusCode {
    fn call_status_code(&self) -> StatusCode;
}

pub struct EndpointRepresentationCompiler<T>(T);

impl<T> EndpointRepresentationCompiler<T> {
    pub const fn from_value(value: T) -> Self {
        Self(value)
    }
}

impl<T: HttpStatusCode + ContainsHeaderMap> EndpointRepresentationCompiler<T> {
    fn builder(&self) -> HttpResponseBuilder {
        let mut builder = HttpResponseBuilder::new(self.0.call_status_code());
        self.0.response_headers().for_each(|(k, v)| {
            match v {
                HeaderValueUpdateMethod::Overwrite(v) => {
                    builder.insert_header((k, v));
                }
                HeaderValueUpdateMethod::Append(v) => {
                    builder.append_header((k, v));
                }
            }
        });

        builder
    }
}

impl<T: IntoPlainText + HttpStatusCode + ContainsHeaderMap> EndpointRepresentationCompiler<T> {
    pub fn into_plain_text(self) -> HttpResponse<BoxBody> {
        let mut builder = self.builder();
        builder
            .insert_header(ContentType::plaintext())
            .body(self.0.into_plain_text())
    }
}

impl<T: Serialize + HttpStatusCode + ContainsHeaderMap> EndpointRepresentationCompiler<T> {
    pub fn into_json(self) -> HttpResponse<BoxBody> {
        self.builder().json(&self.0)
    }
}

type ArrayIter<T, const N: usize> = <[T; N] as IntoIterator>::IntoIter;

/// Every answer here is derived from the request cookies, so no shared cache may reuse it.
fn cookie_dependent_headers() -> ArrayIter<Pair, 2> {
    [
        (CACHE_CONTROL, HeaderValueUpdateMethod::Overwrite(HeaderValue::from_static("no-store"))),
        (VARY, HeaderValueUpdateMethod::Append(HeaderValue::from_static("Cookie"))),
    ].into_iter()
}

// --------------------------

impl HttpStatusCode for AuthStatusResponse {
    fn call_status_code(&self) -> StatusCode {
        StatusCode::OK
    }
}

impl ContainsHeaderMap for AuthStatusResponse {
    type Iterator = ArrayIter<Pair, 2>;

    fn response_headers(&self) -> Self::Iterator {
        cookie_dependent_headers()
    }
}

impl HttpStatusCode for AdminAreaResult {
    fn call_status_code(&self) -> StatusCode {
        match self {
            Ok(_) => StatusCode::OK,
            Err(e) => {
                match e {
                    AdminAreaError::Unauthorized => StatusCode::UNAUTHORIZED,
                }
            }
        }
    }
}

impl ContainsHeaderMap for AdminAreaResult {
    type Iterator = ArrayIter<Pair, 2>;

    fn response_headers(&self) -> Self::Iterator {
        cookie_dependent_headers()
    }
}

impl IntoPlainText for AdminAreaResult {
    fn into_plain_text(self) -> String {
        match self {
            Ok(_) => "You are authorized as an administrator.".to_string(),
            Err(e) => {
                match e {
                    AdminAreaError::Unauthorized => "You must be authorized to perform this action.".to_string(),
                }
            }
        }
    }
}
