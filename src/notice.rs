pub const ADD_LINK_SUCCESS: &str = "Add Link successfully!";

pub fn link_deleted(name: &str) -> String {
    format!("Link named {} has been deleted!", name)
}

pub trait Notifier: Send + Sync {
    fn notice(&self, message: &str);
}

#[derive(Clone, Debug, Default)]
pub struct Console;

impl Notifier for Console {
    fn notice(&self, message: &str) {
        tracing::info!(notice = message);
        println!("{}", message);
    }
}
