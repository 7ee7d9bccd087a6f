/// Summary text for a category toggle, e.g. `Length (2)`.
pub fn category_label(name: &str, checked: usize) -> String {
    if checked == 0 {
        name.to_string()
    } else {
        format!("{} ({})", name, checked)
    }
}

pub fn result_count_label(count: usize) -> String {
    match count {
        1 => "1 fangame".to_string(),
        n => format!("{} fangames", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(category_label("Length", 0), "Length");
        assert_eq!(category_label("Length", 2), "Length (2)");
        assert_eq!(result_count_label(0), "0 fangames");
        assert_eq!(result_count_label(1), "1 fangame");
        assert_eq!(result_count_label(12), "12 fangames");
    }
}
