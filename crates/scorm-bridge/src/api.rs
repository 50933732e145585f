use scorm_types::{CmiElement, ScormVersion};

use crate::error::BridgeResult;
use crate::session::{BridgeSession, SCORM_TRUE};

/// Fixed error-channel strings. Network failures are not surfaced through
/// the SCORM error contract; the channel always reports "no error".
pub const NO_ERROR: &str = "0";
pub const ERROR_STRING: &str = "Some Error";
pub const DIAGNOSTIC: &str = "Some Diagnostic";

/// The SCORM 1.2 API object shape the hosting page installs as `API`.
///
/// Session-lifecycle methods are acknowledgement-only: the bridge does not
/// model the SCORM session state machine, and writes persist continuously
/// through the drain loop rather than at commit points.
#[derive(Clone)]
pub struct Scorm12Api {
    session: BridgeSession,
}

impl Scorm12Api {
    pub fn new(session: BridgeSession) -> Self {
        Self { session }
    }

    pub fn lms_initialize(&self) -> &'static str {
        SCORM_TRUE
    }

    pub fn lms_finish(&self) -> &'static str {
        SCORM_TRUE
    }

    pub fn lms_get_value(&self, element: &str) -> BridgeResult<String> {
        self.session.get_value(&CmiElement::from(element))
    }

    pub fn lms_set_value(&self, element: &str, value: &str) -> &'static str {
        self.session.set_value(element, value)
    }

    pub fn lms_commit(&self) -> &'static str {
        SCORM_TRUE
    }

    pub fn lms_get_last_error(&self) -> &'static str {
        NO_ERROR
    }

    pub fn lms_get_error_string(&self, _error_code: &str) -> &'static str {
        ERROR_STRING
    }

    pub fn lms_get_diagnostic(&self, _error_code: &str) -> &'static str {
        DIAGNOSTIC
    }
}

/// The SCORM 2004 API object shape the hosting page installs as
/// `API_1484_11`.
#[derive(Clone)]
pub struct Scorm2004Api {
    session: BridgeSession,
}

impl Scorm2004Api {
    pub fn new(session: BridgeSession) -> Self {
        Self { session }
    }

    pub fn initialize(&self) -> &'static str {
        SCORM_TRUE
    }

    pub fn terminate(&self) -> &'static str {
        SCORM_TRUE
    }

    pub fn get_value(&self, element: &str) -> BridgeResult<String> {
        self.session.get_value(&CmiElement::from(element))
    }

    pub fn set_value(&self, element: &str, value: &str) -> &'static str {
        self.session.set_value(element, value)
    }

    pub fn commit(&self) -> &'static str {
        SCORM_TRUE
    }

    pub fn get_last_error(&self) -> &'static str {
        NO_ERROR
    }

    pub fn get_error_string(&self, _error_code: &str) -> &'static str {
        ERROR_STRING
    }

    pub fn get_diagnostic(&self, _error_code: &str) -> &'static str {
        DIAGNOSTIC
    }
}

/// The API object for whichever version the session negotiated, as a
/// tagged variant so hosts install the right shape without branching on
/// version strings themselves.
///
/// The score/completion shortcut (`set_score`, `get_score`, `commit_data`)
/// is version-independent and lives on [`BridgeSession`] directly.
#[derive(Clone)]
pub enum RuntimeApi {
    Scorm12(Scorm12Api),
    Scorm2004(Scorm2004Api),
}

impl RuntimeApi {
    pub fn for_session(session: BridgeSession) -> Self {
        match session.version() {
            ScormVersion::Scorm12 => Self::Scorm12(Scorm12Api::new(session)),
            ScormVersion::Scorm2004 => Self::Scorm2004(Scorm2004Api::new(session)),
        }
    }

    /// Name of the global object the hosted package looks up.
    pub fn object_name(&self) -> &'static str {
        match self {
            Self::Scorm12(_) => ScormVersion::Scorm12.api_object_name(),
            Self::Scorm2004(_) => ScormVersion::Scorm2004.api_object_name(),
        }
    }

    pub fn initialize(&self) -> &'static str {
        match self {
            Self::Scorm12(api) => api.lms_initialize(),
            Self::Scorm2004(api) => api.initialize(),
        }
    }

    /// `LMSFinish` in 1.2 terms, `Terminate` in 2004 terms.
    pub fn terminate(&self) -> &'static str {
        match self {
            Self::Scorm12(api) => api.lms_finish(),
            Self::Scorm2004(api) => api.terminate(),
        }
    }

    pub fn get_value(&self, element: &str) -> BridgeResult<String> {
        match self {
            Self::Scorm12(api) => api.lms_get_value(element),
            Self::Scorm2004(api) => api.get_value(element),
        }
    }

    pub fn set_value(&self, element: &str, value: &str) -> &'static str {
        match self {
            Self::Scorm12(api) => api.lms_set_value(element, value),
            Self::Scorm2004(api) => api.set_value(element, value),
        }
    }

    pub fn commit(&self) -> &'static str {
        match self {
            Self::Scorm12(api) => api.lms_commit(),
            Self::Scorm2004(api) => api.commit(),
        }
    }

    pub fn get_last_error(&self) -> &'static str {
        match self {
            Self::Scorm12(api) => api.lms_get_last_error(),
            Self::Scorm2004(api) => api.get_last_error(),
        }
    }

    pub fn get_error_string(&self, error_code: &str) -> &'static str {
        match self {
            Self::Scorm12(api) => api.lms_get_error_string(error_code),
            Self::Scorm2004(api) => api.get_error_string(error_code),
        }
    }

    pub fn get_diagnostic(&self, error_code: &str) -> &'static str {
        match self {
            Self::Scorm12(api) => api.lms_get_diagnostic(error_code),
            Self::Scorm2004(api) => api.get_diagnostic(error_code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::config::BridgeConfig;
    use crate::transport::MemoryTransport;

    fn api_for(version: ScormVersion) -> (RuntimeApi, Arc<MemoryTransport>) {
        let transport = Arc::new(MemoryTransport::new());
        let session = BridgeSession::connect(
            BridgeConfig::new(version),
            Arc::clone(&transport) as Arc<dyn crate::transport::LmsTransport>,
        )
        .unwrap();
        (RuntimeApi::for_session(session), transport)
    }

    #[test]
    fn version_selects_the_shape() {
        let (api, _) = api_for(ScormVersion::Scorm12);
        assert!(matches!(api, RuntimeApi::Scorm12(_)));
        assert_eq!(api.object_name(), "API");

        let (api, _) = api_for(ScormVersion::Scorm2004);
        assert!(matches!(api, RuntimeApi::Scorm2004(_)));
        assert_eq!(api.object_name(), "API_1484_11");
    }

    #[test]
    fn lifecycle_methods_always_acknowledge() {
        for version in [ScormVersion::Scorm12, ScormVersion::Scorm2004] {
            let (api, _) = api_for(version);
            assert_eq!(api.initialize(), "true");
            assert_eq!(api.commit(), "true");
            assert_eq!(api.terminate(), "true");
            // Still "true" with writes pending.
            api.set_value("cmi.core.exit", "suspend");
            assert_eq!(api.commit(), "true");
        }
    }

    #[test]
    fn error_channel_reports_fixed_strings() {
        let (api, _) = api_for(ScormVersion::Scorm12);
        assert_eq!(api.get_last_error(), "0");
        assert_eq!(api.get_error_string("301"), "Some Error");
        assert_eq!(api.get_diagnostic("301"), "Some Diagnostic");
    }

    #[test]
    fn get_and_set_flow_through_the_session() {
        let (api, transport) = api_for(ScormVersion::Scorm2004);
        assert_eq!(api.set_value("cmi.location", "page-2"), "true");
        assert_eq!(api.get_value("cmi.location").unwrap(), "page-2");
        assert!(transport.wait_for_batches(1, Duration::from_secs(5)));
        assert_eq!(transport.batches()[0][0].name.as_str(), "cmi.location");
    }
}
