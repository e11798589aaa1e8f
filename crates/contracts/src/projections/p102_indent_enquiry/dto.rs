use crate::enums::company::Company;
use crate::shared::enquiry::{ColumnDef, FilterField, FilterKind, AVAILABILITY_OPTIONS};

const CGCEL_COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("indent_number", "Indent Number"),
    ColumnDef::date("indent_date", "Date"),
    ColumnDef::text("spare_code", "Spare Code"),
    ColumnDef::text("spare_description", "Spare Description"),
    ColumnDef::number("indent_qty", "Quantity"),
    ColumnDef::text("party_name", "Party Name"),
    ColumnDef::text("created_by", "Created By"),
];

const CGPISL_COLUMNS: &[ColumnDef] = &[
    ColumnDef::serial("Sl. No."),
    ColumnDef::text("indent_number", "Indent Number"),
    ColumnDef::date("indent_date", "Date"),
    ColumnDef::text("spare_code", "Spare Code"),
    ColumnDef::text("spare_description", "Spare Description"),
    ColumnDef::number("indent_qty", "Quantity"),
    ColumnDef::text("party_name", "Party Name"),
];

/// Raised indents (P102)
pub fn columns(company: Company) -> &'static [ColumnDef] {
    match company {
        Company::Cgcel => CGCEL_COLUMNS,
        Company::Cgpisl => CGPISL_COLUMNS,
    }
}

pub fn filter_fields(company: Company) -> Vec<FilterField> {
    let mut fields = vec![
        FilterField::new("spare_code", "Spare Code", FilterKind::Suggest("spare_code")),
        FilterField::new(
            "spare_description",
            "Spare Description",
            FilterKind::Suggest("spare_description"),
        ),
        FilterField::new("division", "Division", FilterKind::Choice(company.divisions())),
        FilterField::new("from_indent_number", "From Indent Number", FilterKind::Text),
        FilterField::new("to_indent_number", "To Indent Number", FilterKind::Text),
        FilterField::new("from_indent_date", "From Indent Date", FilterKind::Date),
        FilterField::new("to_indent_date", "To Indent Date", FilterKind::Date),
    ];
    if company == Company::Cgpisl {
        fields.push(FilterField::new(
            "available",
            "Available",
            FilterKind::Select(AVAILABILITY_OPTIONS),
        ));
    }
    fields
}

/// `GET /stock_<company>/indent_enquiry`
pub fn endpoint(company: Company) -> String {
    format!("{}/indent_enquiry", company.stock_prefix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::enquiry::{ColumnKind, FilterCriteria, PaginationState, EnquiryRequest};

    #[test]
    fn test_date_range_query() {
        let criteria = FilterCriteria::new()
            .with("from_indent_date", "2025-04-01")
            .with("to_indent_date", "2025-04-30");
        let request = EnquiryRequest::new(&criteria, PaginationState::default());
        assert_eq!(
            request.url(&endpoint(Company::Cgcel)),
            "/stock_cgcel/indent_enquiry?from_indent_date=2025-04-01&to_indent_date=2025-04-30&limit=100&offset=0"
        );
    }

    #[test]
    fn test_company_specific_layout() {
        assert_eq!(columns(Company::Cgpisl)[0].kind, ColumnKind::Serial);
        assert!(columns(Company::Cgcel).iter().any(|c| c.key == "created_by"));
        assert!(filter_fields(Company::Cgpisl).iter().any(|f| f.key == "available"));
        assert!(!filter_fields(Company::Cgcel).iter().any(|f| f.key == "available"));
    }
}
