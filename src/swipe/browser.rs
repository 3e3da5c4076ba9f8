/// HTTP method of a submitted form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMethod {
    Get,
    Post,
}

/// A page change requested by the swipe session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Follow a link
    Visit { url: String },
    /// Submit an empty form
    SubmitForm { method: FormMethod, action: String },
}

/// Effects the swipe session needs from the hosting page
pub trait Browser {
    /// Show a blocking notice
    fn alert(&mut self, message: &str);

    /// Ask the user to confirm; `true` means accepted
    fn confirm(&mut self, message: &str) -> bool;

    /// Leave the page for `url`
    fn navigate(&mut self, url: &str);

    /// Submit an empty form to `action`, leaving the page
    fn submit_form(&mut self, method: FormMethod, action: &str);
}

/// A remove button on the matches list
///
/// Carries the server-supplied removal URL, when the page provided one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveControl {
    pub remove_url: Option<String>,
}

impl RemoveControl {
    pub fn new(remove_url: Option<String>) -> Self {
        Self { remove_url }
    }

    /// Control pointing at the removal route for `target_id`
    pub fn for_target(target_id: &str) -> Self {
        Self::new(Some(format!(
            "/match/remove/{}",
            urlencoding::encode(target_id)
        )))
    }
}

/// Browser that records what it was asked to do
///
/// Confirmations are answered with a fixed reply.
#[derive(Debug, Clone)]
pub struct NavigationLog {
    confirm_reply: bool,
    alerts: Vec<String>,
    prompts: Vec<String>,
    navigations: Vec<Navigation>,
}

impl NavigationLog {
    pub fn new(confirm_reply: bool) -> Self {
        Self {
            confirm_reply,
            alerts: Vec::new(),
            prompts: Vec::new(),
            navigations: Vec::new(),
        }
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn navigations(&self) -> &[Navigation] {
        &self.navigations
    }

    /// Hand over recorded navigations, leaving the log empty
    pub fn take_navigations(&mut self) -> Vec<Navigation> {
        std::mem::take(&mut self.navigations)
    }
}

impl Browser for NavigationLog {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.confirm_reply
    }

    fn navigate(&mut self, url: &str) {
        self.navigations.push(Navigation::Visit {
            url: url.to_string(),
        });
    }

    fn submit_form(&mut self, method: FormMethod, action: &str) {
        self.navigations.push(Navigation::SubmitForm {
            method,
            action: action.to_string(),
        });
    }
}
