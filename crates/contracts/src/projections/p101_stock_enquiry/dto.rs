use crate::enums::company::Company;
use crate::shared::enquiry::{ColumnDef, FilterField, FilterKind, AVAILABILITY_OPTIONS};

/// Stock position per spare (P101)
pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("spare_code", "Spare Code"),
    ColumnDef::text("spare_description", "Spare Description"),
    ColumnDef::text("division", "Division"),
    ColumnDef::number("cnf_qty", "CNF Quantity"),
    ColumnDef::number("grc_qty", "GRC Quantity"),
    ColumnDef::number("own_qty", "Own Stock"),
    ColumnDef::number("alp", "ALP"),
];

pub fn filter_fields(company: Company) -> Vec<FilterField> {
    vec![
        FilterField::new("spare_code", "Spare Code", FilterKind::Suggest("spare_code")),
        FilterField::new(
            "spare_description",
            "Spare Description",
            FilterKind::Suggest("spare_description"),
        ),
        FilterField::new("division", "Division", FilterKind::Choice(company.divisions())),
        FilterField::new("cnf", "CNF", FilterKind::Select(AVAILABILITY_OPTIONS)),
        FilterField::new("grc", "GRC", FilterKind::Select(AVAILABILITY_OPTIONS)),
        FilterField::new("own", "Own", FilterKind::Select(AVAILABILITY_OPTIONS)),
    ]
}

/// `GET /stock_<company>/enquiry`
pub fn endpoint(company: Company) -> String {
    format!("{}/enquiry", company.stock_prefix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_per_company() {
        assert_eq!(endpoint(Company::Cgcel), "/stock_cgcel/enquiry");
        assert_eq!(endpoint(Company::Cgpisl), "/stock_cgpisl/enquiry");
    }

    #[test]
    fn test_division_options_follow_company() {
        let fields = filter_fields(Company::Cgpisl);
        let division = fields.iter().find(|f| f.key == "division").unwrap();
        match division.kind {
            FilterKind::Choice(options) => assert!(options.contains(&"FHP")),
            ref other => panic!("unexpected kind {:?}", other),
        }
    }
}
