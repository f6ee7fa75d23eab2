use super::*;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|err| Error::Json(err.to_string()))
}

pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|err| Error::Json(err.to_string()))
}

/// Builds a `T` from `template` with every top-level field present in
/// `json` overridden. Fields absent from `json` keep the template's values,
/// and keys unknown to `T` are ignored unless `T` denies them.
///
/// Both the template and `json` must be JSON objects.
pub fn hydrate<T>(template: &T, json: &str) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let Value::Object(mut fields) =
        serde_json::to_value(template).map_err(|err| Error::Json(err.to_string()))?
    else {
        return Err(Error::Json("template does not serialize to an object".into()));
    };
    let Value::Object(overrides) = from_json::<Value>(json)? else {
        return Err(Error::Json(format!("expected a JSON object: {json}")));
    };

    log::trace!("json: hydrating {} field(s)", overrides.len());
    for (key, value) in overrides {
        fields.insert(key, value);
    }
    serde_json::from_value(Value::Object(fields)).map_err(|err| Error::Json(err.to_string()))
}
