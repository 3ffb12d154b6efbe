use std::borrow::Cow;

#[derive(Debug, serde::Serialize)]
pub struct SuccessData<T: serde::Serialize> {
    pub data: Option<T>,
    pub message: Option<Cow<'static, str>>,
}

/// Outcome of a completed operation, with the message shown to the user.
#[derive(Debug)]
pub struct Success<T: serde::Serialize> {
    pub created: bool,
    pub body: Option<SuccessData<T>>,
}

impl<T: serde::Serialize> Success<T> {
    pub fn ok(data: Option<T>) -> Self {
        Self { created: false, body: Some(SuccessData { data, message: None }) }
    }

    pub fn created(data: Option<T>) -> Self {
        Self { created: true, body: Some(SuccessData { data, message: None }) }
    }

    pub fn no_content() -> Self {
        Self { created: false, body: None }
    }

    pub fn message<M>(mut self, msg: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        match &mut self.body {
            Some(body) => body.message = Some(msg.into()),
            None => self.body = Some(SuccessData { data: None, message: Some(msg.into()) }),
        }
        self
    }

    pub fn data(&self) -> Option<&T> {
        self.body.as_ref().and_then(|b| b.data.as_ref())
    }

    pub fn into_data(self) -> Option<T> {
        self.body.and_then(|b| b.data)
    }

    pub fn message_text(&self) -> &str {
        self.body.as_ref().and_then(|b| b.message.as_deref()).unwrap_or_default()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match &self.body {
            Some(body) => serde_json::to_string(body),
            None => Ok(String::new()),
        }
    }
}
