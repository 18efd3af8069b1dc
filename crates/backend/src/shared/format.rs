/// Размер тела ответа для лога запросов: `512 B`, `12.3 KB`, `4.5 MB`
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let n = bytes as f64;
    if n < KB {
        format!("{} B", bytes)
    } else if n < MB {
        format!("{:.1} KB", n / KB)
    } else {
        format!("{:.1} MB", n / MB)
    }
}
