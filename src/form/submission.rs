use std::future::Future;
use std::time::Duration;

#[cfg(test)]
use super::Field;
use super::{Form, FormErrors};

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("submission task did not complete: {0}")]
    Interrupted(#[from] tokio::task::JoinError),
}

/// Stands in for the backend a form would be posted to.
pub trait Submitter {
    fn submit<F: Form>(&self, form: &F) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Accepts every form after a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Submitter for SimulatedSubmitter {
    async fn submit<F: Form>(&self, form: &F) -> Result<(), SubmitError> {
        let delay = self.delay;
        let name = F::NAME;
        let payload = form.to_json();

        actix_web::rt::spawn(async move {
            tokio::time::sleep(delay).await;
            log::info!("{name} attempt: {payload}");
        })
        .await?;

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    /// Back to editable, with the general error set.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Validation failed; field errors are set and nothing was submitted.
    Invalid,
    Redirect(String),
    Failed,
}

/// A form instance with its errors and submission state.
#[derive(Debug, Clone)]
pub struct FormState<F> {
    data: F,
    errors: FormErrors,
    state: SubmissionState,
}

impl<F: Form> FormState<F> {
    pub fn new(data: F) -> Self {
        Self {
            data,
            errors: FormErrors::default(),
            state: SubmissionState::Idle,
        }
    }

    pub fn data(&self) -> &F {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Updates one field and drops whatever error it was showing. The browser
    /// script does the same for the rendered page.
    #[cfg(test)] // only needed in tests
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        if self.data.set(field, value.into()) {
            self.errors.clear(field);
        }
    }

    /// Recomputes every error from scratch.
    pub fn validate(&mut self) -> bool {
        self.errors = self.data.validate();
        self.errors.is_valid()
    }

    pub async fn submit<S: Submitter>(&mut self, submitter: &S) -> Outcome {
        if !self.validate() {
            self.state = SubmissionState::Idle;
            log::debug!(
                "{} form rejected: {:?}",
                F::NAME,
                self.errors.iter().map(|(field, _)| field.as_str()).collect::<Vec<_>>()
            );
            return Outcome::Invalid;
        }

        self.state = SubmissionState::Submitting;
        self.errors = FormErrors::default();

        match submitter.submit(&self.data).await {
            Ok(()) => {
                self.state = SubmissionState::Idle;
                Outcome::Redirect(self.data.redirect_to())
            }
            Err(e) => {
                log::error!("{} submission failed: {}", F::NAME, e);
                self.errors.set_general(F::FAILURE_MESSAGE);
                self.state = SubmissionState::Failed;
                Outcome::Failed
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::form::user::{LoginFormData, RegisterFormData};
    use std::cell::Cell;
    use std::time::Instant;

    /// Its submission task always panics, counting how often it was called.
    #[derive(Debug, Default)]
    pub struct FailingSubmitter {
        pub calls: Cell<usize>,
    }

    impl Submitter for FailingSubmitter {
        async fn submit<F: Form>(&self, _form: &F) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            let task: tokio::task::JoinHandle<()> =
                actix_web::rt::spawn(async { panic!("backend unavailable") });
            task.await?;
            Ok(())
        }
    }

    #[actix_web::test]
    async fn valid_login_redirects_home_after_the_delay() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(30));
        let mut state = FormState::new(LoginFormData::new("a@b.c", "abcdef"));

        let started = Instant::now();
        let outcome = state.submit(&submitter).await;

        assert!(started.elapsed() >= submitter.delay());
        assert_eq!(outcome, Outcome::Redirect("/".to_string()));
        assert_eq!(state.state(), SubmissionState::Idle);
        assert!(state.errors().is_valid());
        assert!(state.errors().general().is_none());
    }

    #[actix_web::test]
    async fn invalid_form_is_never_submitted() {
        let submitter = FailingSubmitter::default();
        let mut state = FormState::new(LoginFormData::new("", "abc"));

        assert_eq!(state.submit(&submitter).await, Outcome::Invalid);
        assert_eq!(submitter.calls.get(), 0);
        assert_eq!(state.state(), SubmissionState::Idle);
        assert_eq!(state.errors().get(Field::Email), Some("Email is required"));
        assert_eq!(
            state.errors().get(Field::Password),
            Some("Password must be at least 6 characters long")
        );
    }

    #[actix_web::test]
    async fn failed_submission_sets_the_banner_and_allows_retry() {
        let failing = FailingSubmitter::default();
        let mut state = FormState::new(RegisterFormData::new(
            "John",
            "Doe",
            "john@doe.io",
            "Secret123",
            "Secret123",
        ));

        assert_eq!(state.submit(&failing).await, Outcome::Failed);
        assert_eq!(state.state(), SubmissionState::Failed);
        assert_eq!(
            state.errors().general(),
            Some("Registration failed. Please try again.")
        );
        assert!(state.errors().is_valid());

        let working = SimulatedSubmitter::new(Duration::ZERO);
        let outcome = state.submit(&working).await;
        assert_eq!(
            outcome,
            Outcome::Redirect(crate::form::user::REGISTERED_REDIRECT.to_string())
        );
        assert_eq!(state.state(), SubmissionState::Idle);
        assert!(state.errors().general().is_none());
    }

    #[actix_web::test]
    async fn invalid_resubmit_after_failure_clears_the_banner() {
        let mut state = FormState::new(LoginFormData::new("a@b.c", "abcdef"));
        state.submit(&FailingSubmitter::default()).await;
        assert!(state.errors().general().is_some());

        state.edit(Field::Password, "");
        assert_eq!(state.submit(&FailingSubmitter::default()).await, Outcome::Invalid);
        assert!(state.errors().general().is_none());
        assert_eq!(state.state(), SubmissionState::Idle);
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut state = FormState::new(LoginFormData::default());
        assert!(!state.validate());
        assert_eq!(state.errors().len(), 2);

        state.edit(Field::Email, "a");
        assert_eq!(state.errors().get(Field::Email), None);
        assert_eq!(state.errors().get(Field::Password), Some("Password is required"));
        assert_eq!(state.data().email, "a");

        // still invalid on the next attempt; errors are recomputed wholesale
        assert!(!state.validate());
        assert_eq!(
            state.errors().get(Field::Email),
            Some("Please enter a valid email address")
        );
    }
}
