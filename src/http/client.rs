//! `fetch` transport

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response, UrlSearchParams};

use super::request::ApiRequest;
use crate::dom;
use crate::error::GalleryError;

/// Send a request and wait for a 2xx status
pub async fn send(request: &ApiRequest) -> Result<(), GalleryError> {
    let init = RequestInit::new();
    init.set_method(request.method.as_str());

    if request.has_body() {
        let params = UrlSearchParams::new().map_err(|e| GalleryError::js(&e))?;
        for (name, value) in &request.form {
            params.append(name, value);
        }
        let headers = Headers::new().map_err(|e| GalleryError::js(&e))?;
        headers
            .set("Content-Type", "application/x-www-form-urlencoded;charset=UTF-8")
            .map_err(|e| GalleryError::js(&e))?;
        init.set_headers(&headers);
        init.set_body(&params.to_string().into());
    }

    let url = request.encoded_path(|segment| String::from(js_sys::encode_uri_component(segment)));
    let req = Request::new_with_str_and_init(&url, &init).map_err(|e| GalleryError::js(&e))?;

    log::debug!("sending {}", request);
    let response = JsFuture::from(dom::window()?.fetch_with_request(&req))
        .await
        .map_err(|e| GalleryError::Network(crate::error::describe_js(&e)))?;
    let response: Response = response.dyn_into().map_err(|e| GalleryError::js(&e))?;

    if !response.ok() {
        return Err(GalleryError::Http {
            method: request.method.to_string(),
            path: request.path(),
            status: response.status(),
        });
    }

    log::debug!("{} -> {}", request, response.status());
    Ok(())
}
