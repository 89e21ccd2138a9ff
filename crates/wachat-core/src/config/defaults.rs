// --- Default value functions ---

pub(super) fn default_data_dir() -> String {
    "~/.wachat".to_string()
}
pub(super) fn default_log_level() -> String {
    "info".to_string()
}
pub(super) fn default_floating_message() -> String {
    "Hi! I need help with my order.".to_string()
}
pub(super) fn default_test_message() -> String {
    "Test message".to_string()
}
