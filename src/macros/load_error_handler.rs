/// unwrap the result of loading the score files, or log the error and
/// answer the request with an internal server error.
macro_rules! handle_load_error_http {
    ( $data:expr, $target:expr ) => {
        match $data {
            Ok(e) => e,
            Err(error) => {
                log::error!(target: $target, "Error loading scores. (error: {})", error);
                return Err(rocket::http::Status::InternalServerError);
            }
        }
    };
}

pub(crate) use handle_load_error_http;
