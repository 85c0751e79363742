use std::sync::Arc;

use crate::domain::debug_id::{DebugIdGenerator, UuidTokenSource};
use crate::domain::helper::ApiHelper;
use crate::error::ApiResult;
use crate::infrastructure::config::Config;
use crate::infrastructure::i18n::Catalogue;

/// Build the shared [`ApiHelper`] with its default collaborators.
///
/// The catalogue starts from the embedded English messages; files under
/// `config.lang_path` are layered on top.
pub fn register_api_helper(config: &Config) -> ApiResult<Arc<ApiHelper>> {
    let mut catalogue = Catalogue::with_defaults(&config.locale, &config.fallback_locale)?;
    if let Some(path) = &config.lang_path {
        let files = catalogue.load_dir(path)?;
        tracing::info!(path = %path.display(), files, "Translation overrides loaded");
    }

    let debug_ids = DebugIdGenerator::new(Arc::new(UuidTokenSource))
        .with_timestamp(config.debug_id_timestamp);

    tracing::info!(
        locale = catalogue.locale(),
        fallback_locale = catalogue.fallback_locale(),
        "API helper registered"
    );

    Ok(Arc::new(ApiHelper::new(Arc::new(catalogue), debug_ids)))
}
