use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use log::{debug, info, warn};

use super::error::SubmitError;
use super::fields::FormFields;
use super::response;
use super::scheduler::Scheduler;
use super::status::{StatusDisplay, StatusKind, StatusMessage};
use super::transport::{Payload, Transport};
use super::validation;
use crate::config::ContactConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(SubmitError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait FormHandle {
    fn collect(&self) -> FormFields;
    fn reset(&self);
    fn scroll_into_view(&self);
}

struct Inner<T, D, F, S> {
    config: ContactConfig,
    transport: T,
    display: D,
    form: F,
    scheduler: S,
    submissions: Cell<u64>,
}

/// Drives the contact form from submit to faded status message.
///
/// Every call to [`submit`](Self::submit) runs the whole flow on its own:
/// there is no guard against overlapping submissions and nothing is ever
/// cancelled, so the status region shows whichever submission rendered last.
pub struct ContactFormController<T, D, F, S> {
    inner: Rc<Inner<T, D, F, S>>,
}

impl<T, D, F, S> ContactFormController<T, D, F, S>
where
    T: Transport + 'static,
    D: StatusDisplay + Clone + 'static,
    F: FormHandle + 'static,
    S: Scheduler + 'static,
{
    pub fn new(config: ContactConfig, transport: T, display: D, form: F, scheduler: S) -> Self {
        Self {
            inner: Rc::new(Inner {
                config,
                transport,
                display,
                form,
                scheduler,
                submissions: Cell::new(0),
            }),
        }
    }

    pub fn config(&self) -> &ContactConfig {
        &self.inner.config
    }

    pub fn handle_submit(&self) -> impl Future<Output = Outcome> + 'static {
        let fields = self.inner.form.collect();
        if fields.is_empty() {
            warn!("Contact form has no named fields");
        }
        self.submit(fields)
    }

    /// The sending message is rendered before this returns; the returned
    /// future issues the request and renders the outcome.
    pub fn submit(&self, fields: FormFields) -> impl Future<Output = Outcome> + 'static {
        let inner = Rc::clone(&self.inner);
        let id = inner.submissions.get() + 1;
        inner.submissions.set(id);

        let rejected = if inner.config.validate_client_side {
            validation::validate(&fields).err()
        } else {
            None
        };

        if rejected.is_none() {
            debug!("Submission #{}: sending {} fields", id, fields.len());
            inner.display.show(StatusMessage::new(
                StatusKind::Sending,
                inner.config.sending_message.clone(),
            ));
        }

        async move {
            let result = match rejected {
                Some(reason) => Err(SubmitError::Invalid(reason)),
                None => inner.send(&fields).await,
            };
            inner.settle(id, result)
        }
    }
}

impl<T, D, F, S> Inner<T, D, F, S>
where
    T: Transport,
    D: StatusDisplay + Clone + 'static,
    F: FormHandle,
    S: Scheduler,
{
    async fn send(&self, fields: &FormFields) -> Result<(), SubmitError> {
        let payload = Payload::encode(self.config.encoding, fields);
        let response = self.transport.post(&self.config.endpoint, &payload).await?;
        response::interpret(&response)
    }

    fn settle(&self, id: u64, result: Result<(), SubmitError>) -> Outcome {
        let outcome = match result {
            Ok(()) => {
                info!("Submission #{}: message sent", id);
                self.display.show(StatusMessage::new(
                    StatusKind::Success,
                    self.config.success_message.clone(),
                ));
                self.form.reset();
                if self.config.scroll_on_success {
                    self.form.scroll_into_view();
                }
                Outcome::Success
            }
            Err(err) => {
                warn!("Submission #{}: {}", id, err);
                let text = err.user_message(&self.config.generic_error_message);
                self.display.show(StatusMessage::new(StatusKind::Error, text));
                Outcome::Failure(err)
            }
        };

        let display = self.display.clone();
        self.scheduler
            .schedule(self.config.fade_delay(), Box::new(move || display.fade_out()));

        outcome
    }
}
