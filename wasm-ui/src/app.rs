//! Main application component.

use payslip_rs::{Collection, EmailDraft, Field, HeaderField, LineItemId, PayslipDocument, Preview};
use rust_decimal::Decimal;
use std::collections::HashMap;
use yew::prelude::*;

use crate::components::{EditorRow, HeaderForm, LineItemEditor, PreviewPanel};

/// Application state.
#[derive(Clone, PartialEq)]
pub struct AppState {
    pub doc: PayslipDocument,
    /// Basic salary exactly as typed; the document holds the coerced amount.
    pub basic_salary_text: String,
    /// Row amounts as typed, for rows whose value was edited.
    pub value_texts: HashMap<LineItemId, String>,
}

impl Default for AppState {
    fn default() -> Self {
        let doc = PayslipDocument::seeded();
        let basic_salary_text = doc.basic_salary().to_string();
        Self {
            doc,
            basic_salary_text,
            value_texts: HashMap::new(),
        }
    }
}

impl AppState {
    /// Apply a row edit. Returns false for a stale row, leaving state as is.
    pub fn edit_item(
        &mut self,
        collection: Collection,
        id: LineItemId,
        field: Field,
        text: String,
    ) -> bool {
        if !self.doc.update_item(collection, id, field, &text) {
            return false;
        }
        if field == Field::Value {
            self.value_texts.insert(id, text);
        }
        true
    }

    pub fn remove_item(&mut self, collection: Collection, id: LineItemId) {
        self.doc.remove_item(collection, id);
        self.value_texts.remove(&id);
    }

    /// Rows for the editor: typed amount text where present, otherwise the
    /// stored amount.
    pub fn editor_rows(&self, collection: Collection) -> Vec<EditorRow> {
        self.doc
            .store
            .items(collection)
            .iter()
            .map(|item| EditorRow {
                id: item.id(),
                label: item.label.clone(),
                value: self
                    .value_texts
                    .get(&item.id())
                    .cloned()
                    .unwrap_or_else(|| item.value.to_string()),
            })
            .collect()
    }
}

/// Open the host's print dialog for the page.
fn print_page() {
    let Some(window) = web_sys::window() else {
        gloo::console::error!("print: no window");
        return;
    };
    if let Err(e) = window.print() {
        gloo::console::error!("print failed", e);
    }
}

/// Hand a `mailto:` link to the host's mail client.
fn open_mail_client(link: &str) {
    let Some(window) = web_sys::window() else {
        gloo::console::error!("email: no window");
        return;
    };
    if let Err(e) = window.location().set_href(link) {
        gloo::console::error!("opening mail client failed", e);
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(AppState::default);

    let on_header_change = {
        let state = state.clone();
        Callback::from(move |(field, value): (HeaderField, String)| {
            let mut new_state = (*state).clone();
            new_state.doc.set_header(field, value);
            state.set(new_state);
        })
    };

    let on_basic_salary_change = {
        let state = state.clone();
        Callback::from(move |text: String| {
            let mut new_state = (*state).clone();
            new_state.doc.set_basic_salary(&text);
            new_state.basic_salary_text = text;
            state.set(new_state);
        })
    };

    let on_add = {
        let state = state.clone();
        Callback::from(move |collection: Collection| {
            let mut new_state = (*state).clone();
            new_state.doc.add_item(collection, "", Decimal::ZERO);
            state.set(new_state);
        })
    };

    let on_edit = {
        let state = state.clone();
        Callback::from(
            move |(collection, id, field, value): (Collection, LineItemId, Field, String)| {
                let mut new_state = (*state).clone();
                if new_state.edit_item(collection, id, field, value) {
                    state.set(new_state);
                }
            },
        )
    };

    let on_delete = {
        let state = state.clone();
        Callback::from(move |(collection, id): (Collection, LineItemId)| {
            let mut new_state = (*state).clone();
            new_state.remove_item(collection, id);
            state.set(new_state);
        })
    };

    let on_print = Callback::from(|_: MouseEvent| print_page());

    let on_email = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let link = EmailDraft::compose(&state.doc).mailto_link();
            gloo::console::log!("opening email draft");
            open_mail_client(&link);
        })
    };

    let preview = Preview::from_document(&state.doc);

    html! {
        <div class="app">
            <header class="header no-print">
                <h1>{ "Generator Slip Gaji" }</h1>
                <div class="button-group">
                    <button class="print-button" onclick={on_print}>{ "Cetak" }</button>
                    <button class="email-button" onclick={on_email}>{ "Kirim Email" }</button>
                </div>
            </header>

            <main class="main">
                <form class="payslip-form no-print" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                    <HeaderForm
                        header={state.doc.header.clone()}
                        basic_salary={state.basic_salary_text.clone()}
                        on_header_change={on_header_change}
                        on_basic_salary_change={on_basic_salary_change}
                    />
                    { for Collection::ALL.into_iter().map(|collection| html! {
                        <LineItemEditor
                            {collection}
                            rows={state.editor_rows(collection)}
                            on_add={on_add.clone()}
                            on_edit={on_edit.clone()}
                            on_delete={on_delete.clone()}
                        />
                    })}
                </form>

                <PreviewPanel {preview} />
            </main>

            <footer class="footer no-print">
                <span class="footer-build">
                    { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                </span>
            </footer>
        </div>
    }
}
