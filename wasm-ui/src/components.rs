//! UI Components for the payslip editor.

use payslip_rs::{Collection, Field, Header, HeaderField, LineItemId, Preview};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Placeholder for the label input of a row.
pub fn label_placeholder(collection: Collection) -> String {
    format!("Nama {}", collection.title())
}

/// HTML input type for a header field.
fn input_type(field: HeaderField) -> &'static str {
    if field.is_date() { "date" } else { "text" }
}

/// Form with the header fields and basic salary.
#[derive(Properties, PartialEq)]
pub struct HeaderFormProps {
    pub header: Header,
    pub basic_salary: String,
    pub on_header_change: Callback<(HeaderField, String)>,
    pub on_basic_salary_change: Callback<String>,
}

#[function_component(HeaderForm)]
pub fn header_form(props: &HeaderFormProps) -> Html {
    let on_basic_salary = {
        let on_change = props.on_basic_salary_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    html! {
        <div class="form-section">
            <h2>{ "Data Slip Gaji" }</h2>
            { for HeaderField::ALL.into_iter().map(|field| {
                let on_change = props.on_header_change.clone();
                let oninput = Callback::from(move |e: InputEvent| {
                    let target: HtmlInputElement = e.target_unchecked_into();
                    on_change.emit((field, target.value()));
                });
                html! {
                    <label class="form-field">
                        <span>{ field.label() }</span>
                        <input
                            type={input_type(field)}
                            name={field.name()}
                            value={props.header.get(field).to_string()}
                            {oninput}
                        />
                    </label>
                }
            })}
            <label class="form-field">
                <span>{ "Gaji Pokok" }</span>
                <input
                    type="text"
                    inputmode="decimal"
                    name="basic-salary"
                    value={props.basic_salary.clone()}
                    oninput={on_basic_salary}
                />
            </label>
        </div>
    }
}

/// One editor row: the item's label and its amount as the input shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorRow {
    pub id: LineItemId,
    pub label: String,
    pub value: String,
}

/// Editable rows of one line-item collection.
#[derive(Properties, PartialEq)]
pub struct LineItemEditorProps {
    pub collection: Collection,
    pub rows: Vec<EditorRow>,
    pub on_add: Callback<Collection>,
    pub on_edit: Callback<(Collection, LineItemId, Field, String)>,
    pub on_delete: Callback<(Collection, LineItemId)>,
}

#[function_component(LineItemEditor)]
pub fn line_item_editor(props: &LineItemEditorProps) -> Html {
    let collection = props.collection;

    let on_add_click = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| {
            on_add.emit(collection);
        })
    };

    let edit_callback = |id: LineItemId, field: Field| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit((collection, id, field, target.value()));
        })
    };

    html! {
        <div class="form-section">
            <div class="section-header">
                <h3>{ collection.title() }</h3>
                <button type="button" class="add-button" onclick={on_add_click}>
                    { format!("+ Tambah {}", collection.title()) }
                </button>
            </div>
            { for props.rows.iter().map(|row| {
                let id = row.id;
                let on_delete_click = {
                    let on_delete = props.on_delete.clone();
                    Callback::from(move |_: MouseEvent| on_delete.emit((collection, id)))
                };
                html! {
                    <div class="dynamic-input-row" key={id.get()}>
                        <input
                            type="text"
                            class="dynamic-label"
                            value={row.label.clone()}
                            placeholder={label_placeholder(collection)}
                            oninput={edit_callback(id, Field::Label)}
                        />
                        <input
                            type="text"
                            inputmode="decimal"
                            class="dynamic-value"
                            value={row.value.clone()}
                            placeholder="Jumlah"
                            oninput={edit_callback(id, Field::Value)}
                        />
                        <button type="button" class="delete-button" onclick={on_delete_click}>
                            { "X" }
                        </button>
                    </div>
                }
            })}
        </div>
    }
}

/// Read-only payslip preview.
#[derive(Properties, PartialEq)]
pub struct PreviewPanelProps {
    pub preview: Preview,
}

#[function_component(PreviewPanel)]
pub fn preview_panel(props: &PreviewPanelProps) -> Html {
    let p = &props.preview;
    let h = &p.header;

    html! {
        <div class="payslip-preview">
            <div class="preview-header">
                <h2>{ &h.company_name }</h2>
                <p>{ &h.company_address }</p>
                <h3>{ "SLIP GAJI" }</h3>
            </div>
            <table class="employee-info">
                <tr><td>{ "Nama Karyawan" }</td><td>{ &h.employee_name }</td></tr>
                <tr><td>{ "ID Karyawan" }</td><td>{ &h.employee_id }</td></tr>
                <tr><td>{ "Jabatan" }</td><td>{ &h.position }</td></tr>
                <tr>
                    <td>{ "Periode" }</td>
                    <td>{ format!("{} s/d {}", h.pay_period_start, h.pay_period_end) }</td>
                </tr>
                <tr><td>{ "Tanggal Pembayaran" }</td><td>{ &h.pay_date }</td></tr>
            </table>
            { for Collection::ALL.into_iter().map(|collection| {
                let (caption, total) = p.section_total(collection);
                html! {
                    <table class="preview-section">
                        <thead>
                            <tr><th colspan="2">{ collection.title() }</th></tr>
                        </thead>
                        <tbody>
                            { for p.section(collection).iter().map(|row| html! {
                                <tr>
                                    <td>{ &row.label }</td>
                                    <td class="amount">{ &row.amount }</td>
                                </tr>
                            })}
                        </tbody>
                        <tfoot>
                            <tr>
                                <td>{ caption }</td>
                                <td class="amount">{ total }</td>
                            </tr>
                        </tfoot>
                    </table>
                }
            })}
            <div class="net-salary">
                <span>{ "Gaji Diterima" }</span>
                <span class="amount">{ &p.totals.net_salary }</span>
            </div>
        </div>
    }
}
