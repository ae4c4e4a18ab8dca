/// Line-oriented output sink for results.
pub trait Console {
    fn line(&mut self, msg: &str);
}

pub struct Stdout;

impl Console for Stdout {
    fn line(&mut self, msg: &str) {
        println!("{}", msg);
    }
}

/// Collects lines in memory.
impl Console for Vec<String> {
    fn line(&mut self, msg: &str) {
        self.push(msg.to_string());
    }
}
