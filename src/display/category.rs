//! Category listing

use crate::models::ExpenseCategory;

/// Format every category with its storage tag and default icon
pub fn format_category_list() -> String {
    let mut output = String::new();
    output.push_str(&format!("{:16} {:16} {}\n", "Category", "Tag", "Icon"));
    output.push_str(&"-".repeat(52));
    output.push('\n');

    for category in ExpenseCategory::all() {
        output.push_str(&format!(
            "{:16} {:16} {}\n",
            category.display_name(),
            category.tag(),
            category.icon()
        ));
    }

    output.push_str("\n'Other' expenses may carry their own label (expense add -c other -l <LABEL>).\n");
    output
}
