use axum::http::{HeaderMap, HeaderName, HeaderValue};
use tracing::warn;

/// Builds the alert headers the front-end reads to display notifications.
pub struct HeaderUtil;

impl HeaderUtil {
    pub fn create_alert(app_name: &str, message: &str, param: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        insert(&mut headers, &format!("X-{app_name}-alert"), message);
        insert(&mut headers, &format!("X-{app_name}-params"), param);
        headers
    }

    pub fn create_entity_creation_alert(app_name: &str, entity_name: &str, param: &str) -> HeaderMap {
        Self::create_alert(app_name, &format!("{app_name}.{entity_name}.created"), param)
    }

    pub fn create_entity_update_alert(app_name: &str, entity_name: &str, param: &str) -> HeaderMap {
        Self::create_alert(app_name, &format!("{app_name}.{entity_name}.updated"), param)
    }

    pub fn create_entity_deletion_alert(app_name: &str, entity_name: &str, param: &str) -> HeaderMap {
        Self::create_alert(app_name, &format!("{app_name}.{entity_name}.deleted"), param)
    }

    pub fn create_failure_alert(app_name: &str, entity_name: &str, error_key: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        insert(&mut headers, &format!("X-{app_name}-error"), &format!("error.{error_key}"));
        insert(&mut headers, &format!("X-{app_name}-params"), entity_name);
        headers
    }
}

fn insert(headers: &mut HeaderMap, name: &str, value: &str) {
    match (
        HeaderName::from_bytes(name.as_bytes()),
        HeaderValue::from_str(value),
    ) {
        (Ok(name), Ok(value)) => {
            headers.insert(name, value);
        }
        _ => warn!("Skipping invalid alert header {name}: {value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_alert_uses_app_and_entity_names() {
        let headers = HeaderUtil::create_entity_creation_alert("examApp", "produit", "42");

        assert_eq!(headers.get("x-examapp-alert").unwrap(), "examApp.produit.created");
        assert_eq!(headers.get("x-examapp-params").unwrap(), "42");
    }

    #[test]
    fn failure_alert_prefixes_error_key() {
        let headers = HeaderUtil::create_failure_alert("examApp", "produit", "idnull");

        assert_eq!(headers.get("x-examapp-error").unwrap(), "error.idnull");
        assert_eq!(headers.get("x-examapp-params").unwrap(), "produit");
    }
}
