use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::icons::{icon_alert, icon_search, spinner};
use crate::remote::LoadState;
use crate::table::{filter_options, visible_rows, FilterField, SortOption, TableQuery, TableRecord};

const REMOVE_FILTER: &str = "removeFilter";

pub struct Column<R> {
    pub header: &'static str,
    pub render: fn(&R) -> Html,
    pub align_right: bool,
}

impl<R> Column<R> {
    pub fn new(header: &'static str, render: fn(&R) -> Html) -> Self {
        Self {
            header,
            render,
            align_right: false,
        }
    }

    pub fn right(mut self) -> Self {
        self.align_right = true;
        self
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            header: self.header,
            render: self.render,
            align_right: self.align_right,
        }
    }
}

// Columns are static definitions; the header identifies them.
impl<R> PartialEq for Column<R> {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && self.align_right == other.align_right
    }
}

/// Which body the table shows for a load state and visible row count.
#[derive(Clone, Debug, PartialEq)]
pub enum BodyView {
    Spinner,
    Failed(String),
    NoRecords,
    NoMatch,
    Rows,
}

pub fn body_view<R>(state: &LoadState<R>, visible: usize) -> BodyView {
    match state {
        LoadState::Idle | LoadState::Loading => BodyView::Spinner,
        LoadState::Failed(reason) => BodyView::Failed(reason.clone()),
        LoadState::Empty => BodyView::NoRecords,
        LoadState::Loaded(_) if visible == 0 => BodyView::NoMatch,
        LoadState::Loaded(_) => BodyView::Rows,
    }
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps<R: TableRecord> {
    pub title: &'static str,
    pub state: LoadState<R>,
    pub columns: Vec<Column<R>>,
    pub search_placeholder: &'static str,
    /// Shown when rows were fetched but none survive the filters and search.
    pub no_match_message: &'static str,
    pub on_retry: Callback<()>,
    #[prop_or_default]
    pub header_actions: Html,
    #[prop_or_default]
    pub on_row_click: Option<Callback<R>>,
    #[prop_or(false)]
    pub echo_search: bool,
}

#[function_component(DataTable)]
pub fn data_table<R: TableRecord>(props: &DataTableProps<R>) -> Html {
    let query = use_state(TableQuery::<R>::default);
    let menu_open = use_state(|| false);

    let rows = props.state.rows();
    let visible = visible_rows(rows, &query);

    let on_sort = {
        let query = query.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(sort) = <R::Sort as SortOption<R>>::from_label(&select.value()) {
                let mut next = (*query).clone();
                next.sort = sort;
                query.set(next);
            }
        })
    };

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*query).clone();
            next.search = input.value();
            query.set(next);
        })
    };

    let clear_search = {
        let query = query.clone();
        Callback::from(move |_| {
            let mut next = (*query).clone();
            next.search.clear();
            query.set(next);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let menu_items = <R::Field as FilterField>::all()
        .iter()
        .map(|field| {
            let field = *field;
            let onclick = {
                let query = query.clone();
                let menu_open = menu_open.clone();
                Callback::from(move |_| {
                    let mut next = (*query).clone();
                    next.add_filter(field);
                    query.set(next);
                    menu_open.set(false);
                })
            };
            html! {
                <li key={field.label()} onclick={onclick} class="px-4 py-2 hover:bg-[#1f1f1f] flex justify-between cursor-pointer">
                    { field.label() }
                    <span class="text-gray-400">{"+"}</span>
                </li>
            }
        })
        .collect::<Html>();

    let filter_selects = query
        .filters
        .iter()
        .map(|filter| {
            let field = filter.field;
            let current = filter.value.clone();
            let onchange = {
                let query = query.clone();
                Callback::from(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    let value = select.value();
                    let mut next = (*query).clone();
                    if value == REMOVE_FILTER {
                        next.remove_filter(field);
                    } else {
                        next.set_filter_value(field, &value);
                    }
                    query.set(next);
                })
            };
            html! {
                <select key={field.label()} onchange={onchange} class="bg-blue-800 text-white px-2 py-1 rounded-md text-sm">
                    <option value="" selected={current.is_empty()}>{ filter.label() }</option>
                    { for filter_options(rows, field).into_iter().map(|option| {
                        let selected = option == current;
                        html! { <option value={option.clone()} selected={selected}>{ option }</option> }
                    }) }
                    <option value={REMOVE_FILTER}>{"Remover filtro"}</option>
                </select>
            }
        })
        .collect::<Html>();

    let body = match body_view(&props.state, visible.len()) {
        BodyView::Spinner => html! {
            <div class="flex justify-center py-20">{ spinner() }</div>
        },
        BodyView::Failed(reason) => {
            let on_retry = props.on_retry.clone();
            html! {
                <div class="flex flex-col items-center justify-center py-20 gap-4 text-center">
                    <span class="text-red-500">{ icon_alert() }</span>
                    <p class="text-gray-300 text-lg">{"No se pudo cargar la información."}</p>
                    <p class="text-gray-500 text-sm">{ reason }</p>
                    <button class="bg-blue-700 px-4 py-2 rounded-md text-sm font-semibold hover:bg-blue-800" onclick={Callback::from(move |_| on_retry.emit(()))}>
                        {"REINTENTAR"}
                    </button>
                </div>
            }
        }
        BodyView::NoRecords => empty_state("Todavía no hay registros disponibles."),
        BodyView::NoMatch => empty_state(props.no_match_message),
        BodyView::Rows => html! {
            <div class="overflow-x-auto">
                <table class="w-full text-sm text-left">
                    <thead class="bg-blue-800 text-white">
                        <tr>
                            { for props.columns.iter().map(|column| html! {
                                <th class={if column.align_right { "px-4 py-3 text-right" } else { "px-4 py-3" }}>{ column.header }</th>
                            }) }
                        </tr>
                    </thead>
                    <tbody>
                        { for visible.iter().copied().map(|row| {
                            let onclick = props.on_row_click.clone().map(|on_row_click| {
                                let row = row.clone();
                                Callback::from(move |_: MouseEvent| on_row_click.emit(row.clone()))
                            });
                            let class_name = if onclick.is_some() {
                                "border-b border-[#2b2b2b] hover:bg-[#161a1c] cursor-pointer"
                            } else {
                                "border-b border-[#2b2b2b] hover:bg-[#161a1c]"
                            };
                            html! {
                                <tr key={row.row_key()} class={class_name} onclick={onclick}>
                                    { for props.columns.iter().map(|column| html! {
                                        <td class={if column.align_right { "px-4 py-4 text-right" } else { "px-4 py-4" }}>{ (column.render)(row) }</td>
                                    }) }
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        },
    };

    let current_sort = query.sort;

    html! {
        <>
            <div class="flex justify-between items-center mb-6 flex-wrap gap-4">
                <h1 class="text-2xl font-semibold flex items-center gap-2">
                    { props.title }
                    <span class="text-sm bg-blue-600 px-2 rounded-full">{ visible.len() }</span>
                </h1>
                { props.header_actions.clone() }
            </div>

            <div class="flex flex-wrap items-start justify-between mb-4 gap-4">
                <div class="flex flex-wrap items-center gap-4 text-sm relative">
                    <span class="text-gray-400">{"Ordenar por"}</span>
                    <select onchange={on_sort} class="bg-[#1b1e20] border border-gray-600 px-2 py-1 rounded-md text-white">
                        { for <R::Sort as SortOption<R>>::all().iter().map(|option| html! {
                            <option value={option.label()} selected={*option == current_sort}>{ option.label() }</option>
                        }) }
                    </select>

                    <button onclick={toggle_menu} class="text-blue-400 hover:underline">{"Agregar filtro +"}</button>

                    if *menu_open {
                        <div class="absolute z-10 top-8 left-0 bg-[#111314] border border-[#2a2a2a] rounded-md w-64 shadow-lg">
                            <ul class="py-2">{ menu_items }</ul>
                        </div>
                    }

                    { filter_selects }
                </div>

                <div class="w-full md:w-64 ml-auto">
                    <div class="relative">
                        <input
                            type="text"
                            value={query.search.clone()}
                            oninput={on_search}
                            placeholder={props.search_placeholder}
                            class="w-full bg-[#1b1e20] text-white border border-gray-600 rounded-md px-4 py-2 pr-10 placeholder-gray-400 focus:outline-none"
                        />
                        { icon_search() }
                    </div>

                    if props.echo_search && !query.search.is_empty() {
                        <div class="text-sm text-gray-300 mt-2 flex items-center gap-2 justify-end">
                            <span>
                                {"Se muestran los resultados de la búsqueda: "}
                                <span class="text-white font-medium">{ query.search.clone() }</span>
                            </span>
                            <button class="text-gray-400 hover:text-white text-lg leading-none" onclick={clear_search}>{"×"}</button>
                        </div>
                    }
                </div>
            </div>

            { body }
        </>
    }
}

fn empty_state(message: &'static str) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-20 gap-4">
            <span class="text-gray-500">{ icon_search() }</span>
            <p class="text-center text-gray-400 text-lg">{ message }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn loaded_rows_filtered_away_show_no_match() {
        let state = LoadState::Loaded(Rc::new(vec![1u8, 2, 3]));
        assert_eq!(body_view(&state, 0), BodyView::NoMatch);
        assert_eq!(body_view(&state, 2), BodyView::Rows);
    }

    #[test]
    fn each_load_state_has_its_own_body() {
        assert_eq!(body_view(&LoadState::<u8>::Idle, 0), BodyView::Spinner);
        assert_eq!(body_view(&LoadState::<u8>::Loading, 0), BodyView::Spinner);
        assert_eq!(body_view(&LoadState::<u8>::Empty, 0), BodyView::NoRecords);
        assert_eq!(
            body_view(&LoadState::<u8>::Failed("server answered with status 502".into()), 0),
            BodyView::Failed("server answered with status 502".into())
        );
    }
}
