use std::io::{self, BufRead, Write};

/// Management UI page listing the queues on a local broker.
pub const ADMIN_URL: &str = "http://localhost:15672/#/queues";

/// True if the operator answered yes (`y`, case-insensitive). Anything
/// else, including an empty line, is a no.
pub fn wants_admin_site(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Ask whether to open the broker's management UI and, on a yes, open
/// it in the default browser. The launch is best-effort; a browser that
/// fails to start is not observed or reported.
pub fn offer_admin_site() {
    print!("Would you like to monitor RabbitMQ queues? y or n ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return;
    }
    if wants_admin_site(&answer) {
        let _ = webbrowser::open(ADMIN_URL);
    }
}
