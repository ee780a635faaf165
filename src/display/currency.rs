/// Formats an amount the way en-US formats USD: `$1,250.00`.
///
/// Rounds to the cent and nothing further.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let rest = cents % 100;

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{rest:02}", group_thousands(dollars))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
