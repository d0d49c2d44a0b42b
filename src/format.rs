const CURRENCY_PREFIX: &str = "Rp ";
const DECIMAL_MARK: char = ',';

/// Format an amount as rupiah the way an `id-ID` currency formatter does:
/// `.` between thousands, `,` before exactly two decimals and a `Rp ` prefix.
///
/// Rounding is half away from zero on the shortest decimal form of the
/// amount (`66.975` becomes `66,98`), not on its binary value. Infinite and
/// NaN amounts still produce a string (`Rp ∞`, `Rp NaN`).
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{CURRENCY_PREFIX}NaN");
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}{CURRENCY_PREFIX}∞");
    }

    let cents = round_to_cents(&amount.abs().to_string());
    let (whole, fraction) = cents.split_at(cents.len() - 2);
    let sign = if amount < 0.0 && cents.bytes().any(|b| b != b'0') {
        "-"
    } else {
        ""
    };

    format!(
        "{sign}{CURRENCY_PREFIX}{}{DECIMAL_MARK}{fraction}",
        group_raw(whole)
    )
}

/// Round a plain decimal string (`Display` of a non-negative finite `f64`,
/// which never uses an exponent) to two places. Returns the digits of the
/// amount in cents, at least three long, without leading zeros beyond that.
fn round_to_cents(decimal: &str) -> String {
    let (whole, fraction) = decimal.split_once('.').unwrap_or((decimal, ""));
    let mut fraction = fraction.to_string();
    while fraction.len() < 3 {
        fraction.push('0');
    }

    let mut digits: Vec<u8> = whole.bytes().chain(fraction.bytes().take(2)).collect();
    if fraction.as_bytes()[2] >= b'5' {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let first = digits
        .iter()
        .position(|&d| d != b'0')
        .unwrap_or(digits.len())
        .min(digits.len() - 3);
    String::from_utf8_lossy(&digits[first..]).into_owned()
}

/// Insert `.` every three digits from the right, for showing the OTR field
/// while it is being typed. Text that is not a plain digit string is
/// returned unchanged.
pub fn group_digits(text: &str) -> String {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return text.to_string();
    }
    group_raw(text)
}

fn group_raw(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// `0.14` -> `14%`, `0.165` -> `16,5%`.
pub fn format_percent(rate: f64) -> String {
    let percent = (rate * 100.0 * 100.0).round() / 100.0;
    format!("{}%", percent).replace('.', ",")
}
