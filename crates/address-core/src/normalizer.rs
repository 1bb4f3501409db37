use address_types::ParsedComponents;

/// Join components into a canonical comma-separated address.
///
/// Order: `PO Box N`, `Unit N`, street, suburb, city, region, postal code.
/// The PO Box prefix does not suppress a parsed street address, so a PO Box
/// line can appear twice.
pub fn normalize(components: &ParsedComponents) -> String {
    let mut parts: Vec<String> = Vec::new();

    if components.is_po_box() {
        if let Some(number) = components.po_box_number.as_deref() {
            parts.push(format!("PO Box {}", number));
        }
    }

    if let Some(unit) = components.unit.as_deref() {
        parts.push(format!("Unit {}", unit));
    }

    let fields = [
        &components.street_address,
        &components.suburb,
        &components.city,
        &components.region,
        &components.postal_code,
    ];
    parts.extend(
        fields
            .into_iter()
            .flatten()
            .filter(|value| !value.is_empty())
            .cloned(),
    );

    parts.join(", ")
}
