//! Generic sortable table, shared by the three management screens.
//!
//! A screen describes its columns as [`ColumnDef`] values; each cell
//! renderer is a pure transform of the row (plus the row's position in
//! the current page) and must not mutate it.

use std::sync::Arc;

use leptos::prelude::*;
use thaw::*;

use crate::shared::collection::sort_indicator;

pub struct ColumnDef<T> {
    pub field: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub min_width: f64,
    render: Arc<dyn Fn(usize, &T) -> AnyView + Send + Sync>,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            label: self.label,
            sortable: self.sortable,
            min_width: self.min_width,
            render: Arc::clone(&self.render),
        }
    }
}

impl<T> ColumnDef<T> {
    pub fn new(
        field: &'static str,
        label: &'static str,
        min_width: f64,
        render: impl Fn(usize, &T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            field,
            label,
            sortable: false,
            min_width,
            render: Arc::new(render),
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn render(&self, index: usize, row: &T) -> AnyView {
        (self.render)(index, row)
    }
}

#[component]
pub fn DataTable<T>(
    /// HTML id of the table element.
    table_id: &'static str,
    columns: Vec<ColumnDef<T>>,
    /// Rows of the current page, already sorted and sliced.
    #[prop(into)]
    items: Signal<Vec<T>>,
    #[prop(into)] sort_field: Signal<String>,
    #[prop(into)] sort_ascending: Signal<bool>,
    on_sort: Callback<&'static str>,
    /// Stable unique row identifier, used as the table row key.
    row_key: fn(&T) -> String,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let header_cells = columns
        .iter()
        .map(|col| {
            let field = col.field;
            let label = col.label;
            let min_width = col.min_width;
            if col.sortable {
                view! {
                    <TableHeaderCell resizable=false min_width=min_width>
                        <div
                            class="table__sortable-header"
                            style="cursor:pointer;"
                            on:click=move |_| on_sort.run(field)
                        >
                            {label}
                            <span class="table__sort-indicator">
                                {move || sort_indicator(&sort_field.get(), field, sort_ascending.get())}
                            </span>
                        </div>
                    </TableHeaderCell>
                }
                .into_any()
            } else {
                view! {
                    <TableHeaderCell resizable=false min_width=min_width>
                        {label}
                    </TableHeaderCell>
                }
                .into_any()
            }
        })
        .collect_view();

    let body_columns = columns.clone();

    view! {
        <div class="table-wrapper">
            <Table attr:id=table_id attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>{header_cells}</TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each={move || items.get().into_iter().enumerate().collect::<Vec<_>>()}
                        key=move |(_, row): &(usize, T)| row_key(row)
                        children=move |(index, row): (usize, T)| {
                            let cells = body_columns
                                .iter()
                                .map(|col| {
                                    let cell = col.render(index, &row);
                                    view! {
                                        <TableCell>
                                            <TableCellLayout>
                                                {cell}
                                            </TableCellLayout>
                                        </TableCell>
                                    }
                                })
                                .collect_view();
                            view! { <TableRow>{cells}</TableRow> }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}
