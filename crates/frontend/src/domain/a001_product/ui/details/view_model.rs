use crate::domain::a001_product::api::HttpProductStore;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::draft::DraftField;
use contracts::domain::a001_product::submission::{
    dispatch_outcome, run_submission, ProductFormState, SubmitAttempt,
};
use contracts::shared::notification::{Navigator, Notifier};
use leptos::prelude::*;

/// ViewModel for the product form.
///
/// All state lives in one signal so the view only ever sees consistent
/// snapshots. The save request runs outside the signal; its result is
/// applied back only if the session that started it is still current.
#[derive(Clone, Copy)]
pub struct ProductFormViewModel {
    pub state: RwSignal<ProductFormState>,
}

impl ProductFormViewModel {
    pub fn new(initial: Option<Product>) -> Self {
        Self {
            state: RwSignal::new(ProductFormState::new(initial)),
        }
    }

    pub fn field(&self, field: DraftField) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.draft().get(field).to_string()))
    }

    pub fn setter(&self, field: DraftField) -> Callback<String> {
        let state = self.state;
        Callback::new(move |value: String| state.update(|s| s.set_field(field, value)))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error().map(str::to_string)))
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_submitting()))
    }

    pub fn submit_label(&self) -> Signal<&'static str> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.submit_label()))
    }

    /// Validate and, if accepted, persist in the background
    pub fn submit_command<N, V>(&self, notifier: N, navigator: V, on_saved: Option<Callback<Product>>)
    where
        N: Notifier + 'static,
        V: Navigator + 'static,
    {
        let state = self.state;
        let attempt = state
            .try_update(|s| s.begin_submit())
            .unwrap_or(SubmitAttempt::Closed);

        let (ticket, dto) = match attempt {
            SubmitAttempt::Accepted { ticket, dto } => (ticket, dto),
            SubmitAttempt::Rejected(e) => {
                log::debug!("product form rejected: {}", e);
                return;
            }
            SubmitAttempt::Busy | SubmitAttempt::Closed => return,
        };

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = run_submission(&HttpProductStore, dto).await;

            // None means the form was disposed while the request was out.
            let applied = state
                .try_update(|s| s.finish_submit(ticket, &outcome))
                .unwrap_or(false);
            if !applied {
                log::debug!("ignoring save response for a closed product form");
                return;
            }

            if let (Some(product), Some(on_saved)) = (outcome.saved(), on_saved) {
                on_saved.run(product.clone());
            }
            dispatch_outcome(&outcome, &notifier, &navigator);
        });
    }

    pub fn close(&self) {
        self.state.try_update(|s| s.close());
    }
}
