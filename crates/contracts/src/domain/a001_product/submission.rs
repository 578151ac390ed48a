//! Product form submission state machine.
//!
//! One submit cycle is split in three steps so that a reactive UI can hold
//! the state in a signal and release it across the await point:
//!
//! 1. [`ProductFormState::begin_submit`] runs the validation gate and, on
//!    success, flips the form to `Submitting` and hands out a ticket plus the
//!    merged record.
//! 2. [`run_submission`] calls the persistence operation and maps the result
//!    to a [`SubmitOutcome`]. It does not touch form state.
//! 3. [`ProductFormState::finish_submit`] applies the outcome, unless the
//!    session was closed in the meantime, in which case the late response is
//!    dropped.
//!
//! [`dispatch_outcome`] wires an applied outcome to notifications and
//! navigation.

use super::aggregate::{Product, ProductDto};
use super::draft::{DraftField, ProductDraft, ValidationError};
use crate::shared::notification::{
    Navigator, Notification, NotificationKind, Notifier, CATALOG_ROOT,
};
use thiserror::Error;

/// Failure reported by the persistence operation; the message is shown verbatim
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PersistenceError {
    pub message: String,
}

impl PersistenceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for PersistenceError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

/// Create-or-update call against the product store
#[allow(async_fn_in_trait)]
pub trait ProductPersistence {
    async fn save(&self, dto: ProductDto) -> Result<Product, PersistenceError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
}

/// Proof that a submit was accepted during a particular form session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    session: u64,
}

/// Result of asking the form to submit
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt {
    /// Gate passed; the caller must persist `dto` and report back with `ticket`
    Accepted { ticket: SubmitTicket, dto: ProductDto },
    /// Gate failed; the error is now displayed
    Rejected(ValidationError),
    /// A submit is already in flight
    Busy,
    /// The session was closed
    Closed,
}

/// Terminal outcome of one submit cycle
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Succeeded(Product),
    Failed(String),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded(_))
    }

    /// Record returned by the persistence layer, on success
    pub fn saved(&self) -> Option<&Product> {
        match self {
            SubmitOutcome::Succeeded(product) => Some(product),
            SubmitOutcome::Failed(_) => None,
        }
    }

    pub fn notification(&self) -> Notification {
        match self {
            SubmitOutcome::Succeeded(_) => Notification::new(
                "Success!",
                "Product has been saved.",
                NotificationKind::Success,
            ),
            SubmitOutcome::Failed(_) => Notification::new(
                "Error!",
                "There was an issue saving the product.",
                NotificationKind::Error,
            ),
        }
    }
}

/// Persist an accepted record and translate the result
pub async fn run_submission<P: ProductPersistence>(persistence: &P, dto: ProductDto) -> SubmitOutcome {
    match persistence.save(dto).await {
        Ok(product) => SubmitOutcome::Succeeded(product),
        Err(e) => SubmitOutcome::Failed(e.message),
    }
}

/// Notify, then navigate to the catalog on success
pub fn dispatch_outcome<N, V>(outcome: &SubmitOutcome, notifier: &N, navigator: &V)
where
    N: Notifier + ?Sized,
    V: Navigator + ?Sized,
{
    notifier.notify(outcome.notification());
    if outcome.is_success() {
        navigator.navigate(CATALOG_ROOT);
    }
}

/// State of one product form session
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormState {
    original: Option<Product>,
    draft: ProductDraft,
    status: SubmissionStatus,
    error: Option<String>,
    session: u64,
    closed: bool,
}

impl ProductFormState {
    /// Open a session; `initial` selects edit mode
    pub fn new(initial: Option<Product>) -> Self {
        Self {
            draft: ProductDraft::seed(initial.as_ref()),
            original: initial,
            status: SubmissionStatus::Idle,
            error: None,
            session: 0,
            closed: false,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.original.is_some()
    }

    pub fn original(&self) -> Option<&Product> {
        self.original.as_ref()
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Loading..."
        } else if self.is_edit_mode() {
            "Update product"
        } else {
            "Add product"
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
    }

    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.closed {
            return SubmitAttempt::Closed;
        }
        if self.is_submitting() {
            return SubmitAttempt::Busy;
        }

        let valid = match self.draft.validate() {
            Ok(valid) => valid,
            Err(e) => {
                self.error = Some(e.to_string());
                return SubmitAttempt::Rejected(e);
            }
        };

        self.error = None;
        self.status = SubmissionStatus::Submitting;
        SubmitAttempt::Accepted {
            ticket: SubmitTicket {
                session: self.session,
            },
            dto: valid.merge(self.original.as_ref()),
        }
    }

    /// Apply an outcome. Returns `false` when the response is stale and was
    /// dropped without touching state.
    pub fn finish_submit(&mut self, ticket: SubmitTicket, outcome: &SubmitOutcome) -> bool {
        if self.closed || ticket.session != self.session || !self.is_submitting() {
            return false;
        }

        self.status = SubmissionStatus::Idle;
        match outcome {
            SubmitOutcome::Succeeded(product) => {
                self.error = None;
                self.original = Some(product.clone());
            }
            SubmitOutcome::Failed(message) => {
                self.error = Some(message.clone());
            }
        }
        true
    }

    /// End the session. Any response still in flight will be ignored.
    pub fn close(&mut self) {
        self.closed = true;
        self.session += 1;
    }

    /// Whole cycle for callers that can hold the state across the await.
    ///
    /// Returns `None` when nothing was sent to the persistence layer.
    pub async fn submit<P: ProductPersistence>(&mut self, persistence: &P) -> Option<SubmitOutcome> {
        let SubmitAttempt::Accepted { ticket, dto } = self.begin_submit() else {
            return None;
        };
        let outcome = run_submission(persistence, dto).await;
        self.finish_submit(ticket, &outcome);
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::ProductId;
    use crate::domain::common::EntityMetadata;
    use crate::enums::product_category::ProductCategory;
    use std::cell::RefCell;

    /// Records every call and answers with a canned result
    struct FakeStore {
        calls: RefCell<Vec<ProductDto>>,
        fail_with: Option<String>,
    }

    impl FakeStore {
        fn ok() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_with: Some(message.to_string()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl ProductPersistence for FakeStore {
        async fn save(&self, dto: ProductDto) -> Result<Product, PersistenceError> {
            self.calls.borrow_mut().push(dto.clone());
            if let Some(message) = &self.fail_with {
                return Err(PersistenceError::new(message.clone()));
            }
            let mut product = Product::new_for_insert(&dto);
            if let Some(id) = dto.id.as_deref() {
                product.id = ProductId(uuid::Uuid::parse_str(id).unwrap());
            }
            Ok(product)
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<String>>,
    }

    impl Notifier for Recorder {
        fn notify(&self, n: Notification) {
            self.events
                .borrow_mut()
                .push(format!("notify:{:?}:{}", n.kind, n.title));
        }
    }

    impl Navigator for Recorder {
        fn navigate(&self, target: &str) {
            self.events.borrow_mut().push(format!("navigate:{}", target));
        }
    }

    fn fill_valid(state: &mut ProductFormState) {
        state.set_field(DraftField::Title, "Shirt".into());
        state.set_field(DraftField::Price, "19.99".into());
        state.set_field(DraftField::Description, "Cotton shirt".into());
        state.set_field(DraftField::Image, "http://x/img.png".into());
        state.set_field(DraftField::Category, "men's clothing".into());
    }

    fn existing() -> Product {
        Product {
            id: ProductId::new_v4(),
            title: "Backpack".into(),
            price: 109.95,
            description: "Fits 15 inch laptops".into(),
            image: "http://x/bag.png".into(),
            category: ProductCategory::MensClothing,
            rating: None,
            metadata: EntityMetadata::new(),
        }
    }

    #[tokio::test]
    async fn test_missing_field_never_reaches_persistence() {
        let store = FakeStore::ok();
        for field in DraftField::all() {
            let mut state = ProductFormState::new(None);
            fill_valid(&mut state);
            state.set_field(field, String::new());

            assert_eq!(state.submit(&store).await, None);
            assert_eq!(state.error(), Some("Please fill in all required fields."));
            assert_eq!(state.status(), SubmissionStatus::Idle);
        }
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_bad_price_never_reaches_persistence() {
        let store = FakeStore::ok();
        for price in ["abc", "-5", "0"] {
            let mut state = ProductFormState::new(None);
            fill_valid(&mut state);
            state.set_field(DraftField::Price, price.into());

            assert_eq!(state.submit(&store).await, None);
            assert_eq!(state.error(), Some("Price must be a positive number."));
        }
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_valid_submit_persists_once_then_notifies_and_navigates() {
        let store = FakeStore::ok();
        let recorder = Recorder::default();
        let mut state = ProductFormState::new(None);
        fill_valid(&mut state);

        let outcome = state.submit(&store).await.unwrap();
        dispatch_outcome(&outcome, &recorder, &recorder);

        let calls = store.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].title, "Shirt");
        assert_eq!(calls[0].price, 19.99);
        assert_eq!(calls[0].description, "Cotton shirt");
        assert_eq!(calls[0].image, "http://x/img.png");
        assert_eq!(calls[0].category, ProductCategory::MensClothing);
        assert_eq!(calls[0].id, None);

        assert!(outcome.is_success());
        assert_eq!(outcome.saved().map(|p| p.title.as_str()), Some("Shirt"));
        assert_eq!(
            *recorder.events.borrow(),
            vec!["notify:Success:Success!".to_string(), "navigate:/".to_string()]
        );
        assert_eq!(state.error(), None);
        assert_eq!(state.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_failure_shows_message_and_keeps_draft() {
        let store = FakeStore::failing("network down");
        let recorder = Recorder::default();
        let mut state = ProductFormState::new(None);
        fill_valid(&mut state);
        let before = state.draft().clone();

        let outcome = state.submit(&store).await.unwrap();
        dispatch_outcome(&outcome, &recorder, &recorder);

        assert_eq!(outcome, SubmitOutcome::Failed("network down".into()));
        assert!(outcome.saved().is_none());
        assert_eq!(state.error(), Some("network down"));
        assert_eq!(state.draft(), &before);
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(
            *recorder.events.borrow(),
            vec!["notify:Error:Error!".to_string()]
        );

        // retry without retyping
        let retry = FakeStore::ok();
        assert!(state.submit(&retry).await.unwrap().is_success());
        assert_eq!(retry.call_count(), 1);
    }

    #[test]
    fn test_second_submit_while_submitting_is_ignored() {
        let mut state = ProductFormState::new(None);
        fill_valid(&mut state);

        let SubmitAttempt::Accepted { ticket, .. } = state.begin_submit() else {
            panic!("first submit should be accepted");
        };
        assert!(state.is_submitting());
        assert_eq!(state.submit_label(), "Loading...");

        assert_eq!(state.begin_submit(), SubmitAttempt::Busy);
        assert_eq!(state.error(), None);

        assert!(state.finish_submit(ticket, &SubmitOutcome::Failed("boom".into())));
        assert!(!state.is_submitting());
        assert!(matches!(state.begin_submit(), SubmitAttempt::Accepted { .. }));
    }

    #[test]
    fn test_validation_error_is_replaced_not_stacked() {
        let mut state = ProductFormState::new(None);
        assert!(matches!(state.begin_submit(), SubmitAttempt::Rejected(_)));
        assert_eq!(state.error(), Some("Please fill in all required fields."));

        fill_valid(&mut state);
        state.set_field(DraftField::Price, "0".into());
        state.begin_submit();
        assert_eq!(state.error(), Some("Price must be a positive number."));

        state.set_field(DraftField::Price, "5".into());
        assert!(matches!(state.begin_submit(), SubmitAttempt::Accepted { .. }));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_late_response_after_close_is_dropped() {
        let mut state = ProductFormState::new(None);
        fill_valid(&mut state);
        let SubmitAttempt::Accepted { ticket, .. } = state.begin_submit() else {
            panic!("submit should be accepted");
        };

        state.close();
        let snapshot = state.clone();

        assert!(!state.finish_submit(ticket, &SubmitOutcome::Failed("late".into())));
        assert_eq!(state, snapshot);
        assert_eq!(state.begin_submit(), SubmitAttempt::Closed);
    }

    #[tokio::test]
    async fn test_edit_mode_merges_original_record() {
        let product = existing();
        let store = FakeStore::ok();
        let mut state = ProductFormState::new(Some(product.clone()));
        assert!(state.is_edit_mode());
        assert_eq!(state.submit_label(), "Update product");
        assert_eq!(state.draft().price, "109.95");

        state.set_field(DraftField::Title, "Backpack v2".into());
        let outcome = state.submit(&store).await.unwrap();

        let calls = store.calls.borrow();
        assert_eq!(calls[0].id, Some(product.id.to_string()));
        assert_eq!(calls[0].title, "Backpack v2");
        assert_eq!(calls[0].price, 109.95);
        match outcome {
            SubmitOutcome::Succeeded(saved) => assert_eq!(saved.id, product.id),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_create_mode_label() {
        let state = ProductFormState::new(None);
        assert!(!state.is_edit_mode());
        assert_eq!(state.submit_label(), "Add product");
    }
}
