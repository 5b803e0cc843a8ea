use std::cmp::Ordering;

use yew::prelude::*;

use crate::components::icons::icon_edit;
use crate::components::{Column, DataTable};
use crate::format::initials;
use crate::models::Employee;
use crate::remote::use_remote_list;
use crate::table::{
    compare_numeric_text, compare_text, compare_timestamps, compare_timestamps_desc, FieldValue, FilterField, FilterKind,
    SortOption, TableRecord,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EmployeeField {
    RemunerationType,
    Position,
    Section,
    WorkShift,
    Active,
    Nationality,
    Role,
}

impl FilterField for EmployeeField {
    fn all() -> &'static [Self] {
        &[
            EmployeeField::RemunerationType,
            EmployeeField::Position,
            EmployeeField::Section,
            EmployeeField::WorkShift,
            EmployeeField::Active,
            EmployeeField::Nationality,
            EmployeeField::Role,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            EmployeeField::RemunerationType => "Tipo de remuneración",
            EmployeeField::Position => "Cargo",
            EmployeeField::Section => "Sector",
            EmployeeField::WorkShift => "Turno",
            EmployeeField::Active => "Activo",
            EmployeeField::Nationality => "Nacionalidad",
            EmployeeField::Role => "Rol",
        }
    }

    fn kind(self) -> FilterKind {
        match self {
            EmployeeField::Active => FilterKind::Flag {
                yes: "Activo",
                no: "Inactivo",
            },
            _ => FilterKind::Text,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum EmployeeSort {
    #[default]
    Newest,
    Oldest,
    Number,
    FirstName,
    LastName,
    Email,
}

impl SortOption<Employee> for EmployeeSort {
    fn all() -> &'static [Self] {
        &[
            EmployeeSort::Newest,
            EmployeeSort::Oldest,
            EmployeeSort::Number,
            EmployeeSort::FirstName,
            EmployeeSort::LastName,
            EmployeeSort::Email,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            EmployeeSort::Newest => "Más reciente",
            EmployeeSort::Oldest => "Más antiguos",
            EmployeeSort::Number => "Número",
            EmployeeSort::FirstName => "Nombre",
            EmployeeSort::LastName => "Apellido",
            EmployeeSort::Email => "Email",
        }
    }

    fn compare(self, a: &Employee, b: &Employee) -> Ordering {
        match self {
            EmployeeSort::Newest => compare_timestamps_desc(&a.created_at, &b.created_at),
            EmployeeSort::Oldest => compare_timestamps(&a.created_at, &b.created_at),
            EmployeeSort::Number => compare_numeric_text(&a.employee_number, &b.employee_number),
            EmployeeSort::FirstName => compare_text(&a.first_name, &b.first_name),
            EmployeeSort::LastName => compare_text(
                a.last_name.as_deref().unwrap_or(""),
                b.last_name.as_deref().unwrap_or(""),
            ),
            EmployeeSort::Email => compare_text(&a.email, &b.email),
        }
    }
}

impl TableRecord for Employee {
    type Field = EmployeeField;
    type Sort = EmployeeSort;

    fn row_key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, field: EmployeeField) -> FieldValue {
        match field {
            EmployeeField::RemunerationType => FieldValue::opt_text(self.remuneration_type.as_deref()),
            EmployeeField::Position => FieldValue::opt_text(self.position.as_deref()),
            EmployeeField::Section => FieldValue::opt_text(self.section.as_deref()),
            EmployeeField::WorkShift => FieldValue::opt_text(self.work_shift.as_deref()),
            EmployeeField::Active => FieldValue::Flag(self.is_active),
            EmployeeField::Nationality => FieldValue::opt_text(self.nationality.as_deref()),
            EmployeeField::Role => FieldValue::opt_text(self.role.as_deref()),
        }
    }

    fn search_text(&self) -> Vec<&str> {
        let mut text = vec![self.first_name.as_str(), self.email.as_str()];
        if let Some(last_name) = &self.last_name {
            text.push(last_name);
        }
        text
    }
}

fn number_cell(e: &Employee) -> Html {
    html! {
        <div class="flex items-center gap-3">
            <div class="bg-blue-700 w-8 h-8 rounded-full flex items-center justify-center text-xs font-bold">
                { initials(&e.first_name) }
            </div>
            <span>{ format!("#{}", e.employee_number) }</span>
        </div>
    }
}

fn name_cell(e: &Employee) -> Html {
    match &e.last_name {
        Some(last_name) => html! { { format!("{} {}", e.first_name, last_name) } },
        None => html! { { e.first_name.clone() } },
    }
}

fn email_cell(e: &Employee) -> Html {
    html! { { e.email.clone() } }
}

fn phone_cell(e: &Employee) -> Html {
    html! { { e.phone_number.clone().unwrap_or_else(|| "-".to_string()) } }
}

fn status_cell(e: &Employee) -> Html {
    let (class_name, label) = if e.is_active {
        ("bg-green-700 text-white text-xs px-2 py-1 rounded-full", "Activo")
    } else {
        ("bg-red-700 text-white text-xs px-2 py-1 rounded-full", "Inactivo")
    };
    html! { <span class={class_name}>{ label }</span> }
}

// Editing is not offered yet; the button is inert.
fn action_cell(_: &Employee) -> Html {
    html! {
        <button class="text-blue-400 hover:text-white" title="Editar">{ icon_edit() }</button>
    }
}

fn columns() -> Vec<Column<Employee>> {
    vec![
        Column::new("Número", number_cell),
        Column::new("Nombre", name_cell),
        Column::new("Correo", email_cell),
        Column::new("Teléfono", phone_cell),
        Column::new("Estado", status_cell),
        Column::new("Acción", action_cell).right(),
    ]
}

#[function_component(EmployeesPage)]
pub fn employees_page() -> Html {
    let employees = use_remote_list::<Employee>();

    let actions = html! {
        <div class="flex gap-2">
            <button class="bg-[#2f2f2f] px-4 py-2 rounded-md text-sm hover:bg-[#3a3a3a]">{"IMPORTAR"}</button>
            <button class="bg-blue-700 px-4 py-2 rounded-md text-sm font-semibold hover:bg-blue-800">{"+ NUEVO EMPLEADO"}</button>
        </div>
    };

    html! {
        <DataTable<Employee>
            title="Lista de empleados"
            state={employees.state}
            columns={columns()}
            search_placeholder="Buscar empleados"
            no_match_message="No se encontraron empleados."
            on_retry={employees.reload}
            header_actions={actions}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{visible_rows, TableQuery};

    fn employee(id: &str, number: &str, first: &str, last: Option<&str>, email: &str, active: bool, created: &str) -> Employee {
        Employee {
            id: id.into(),
            employee_number: number.into(),
            first_name: first.into(),
            last_name: last.map(Into::into),
            email: email.into(),
            phone_number: None,
            is_active: active,
            remuneration_type: Some("Mensual".into()),
            position: Some("Analista".into()),
            section: None,
            work_shift: Some("Tarde".into()),
            nationality: Some("Uruguaya".into()),
            role: Some("employee".into()),
            created_at: created.into(),
        }
    }

    fn staff() -> Vec<Employee> {
        vec![
            employee("1", "10", "Lucía", Some("Pérez"), "lucia@dlab.com", true, "2024-01-10T09:00:00Z"),
            employee("2", "9", "martín", None, "martin@dlab.com", false, "2024-03-05T09:00:00Z"),
            employee("3", "100", "Ana", Some("Gómez"), "ana@dlab.com", true, "2023-12-01T09:00:00Z"),
        ]
    }

    fn ids(rows: Vec<&Employee>) -> Vec<&str> {
        rows.into_iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn default_sort_is_newest_first() {
        let rows = staff();
        let query = TableQuery::<Employee>::default();
        assert_eq!(ids(visible_rows(&rows, &query)), vec!["2", "1", "3"]);
    }

    #[test]
    fn undated_rows_come_first_in_both_directions() {
        let rows = vec![
            employee("dated", "1", "Ana", None, "ana@dlab.com", true, "2024-01-01T00:00:00Z"),
            employee("undated", "2", "Bea", None, "bea@dlab.com", true, ""),
        ];
        let mut query = TableQuery::<Employee>::default();
        assert_eq!(ids(visible_rows(&rows, &query)), vec!["undated", "dated"]);

        query.sort = EmployeeSort::Oldest;
        assert_eq!(ids(visible_rows(&rows, &query)), vec!["undated", "dated"]);
    }

    #[test]
    fn number_sort_is_numeric() {
        let rows = staff();
        let query = TableQuery::<Employee> {
            sort: EmployeeSort::Number,
            ..TableQuery::default()
        };
        assert_eq!(ids(visible_rows(&rows, &query)), vec!["2", "1", "3"]);
    }

    #[test]
    fn name_sorts_ignore_case() {
        let rows = staff();
        let mut query = TableQuery::<Employee> {
            sort: EmployeeSort::FirstName,
            ..TableQuery::default()
        };
        assert_eq!(ids(visible_rows(&rows, &query)), vec!["3", "1", "2"]);

        query.sort = EmployeeSort::LastName;
        assert_eq!(ids(visible_rows(&rows, &query)), vec!["2", "3", "1"]);
    }

    #[test]
    fn search_covers_names_and_email() {
        let rows = staff();
        let mut query = TableQuery::<Employee>::default();

        query.search = "GÓMEZ".into();
        assert_eq!(ids(visible_rows(&rows, &query)), vec!["3"]);

        query.search = "martin@".into();
        assert_eq!(ids(visible_rows(&rows, &query)), vec!["2"]);
    }

    #[test]
    fn unmatched_search_shows_nothing_and_keeps_list() {
        let rows = staff();
        let query = TableQuery::<Employee> {
            search: "nadie@ningun.lado".into(),
            ..TableQuery::default()
        };
        assert!(visible_rows(&rows, &query).is_empty());
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn active_filter_uses_status_labels() {
        let rows = staff();
        let mut query = TableQuery::<Employee>::default();
        query.add_filter(EmployeeField::Active);
        query.set_filter_value(EmployeeField::Active, "Inactivo");
        assert_eq!(ids(visible_rows(&rows, &query)), vec!["2"]);
    }

    #[test]
    fn section_filter_never_matches_missing_values() {
        let rows = staff();
        let mut query = TableQuery::<Employee>::default();
        query.add_filter(EmployeeField::Section);
        query.set_filter_value(EmployeeField::Section, "Finanzas");
        assert!(visible_rows(&rows, &query).is_empty());
        assert!(crate::table::filter_options(&rows, EmployeeField::Section).is_empty());
    }
}
