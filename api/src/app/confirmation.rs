//! Confirmation composition
//!
//! Builds the short confirmation line returned to the caller and the HTML email
//! sent to the buyer.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::domain::entities::{AgeBracket, PassType, PaymentMethod, Visitor};

/// Ticket counts per pass type and age bracket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreakdownSummary {
    pub regular: usize,
    pub vip: usize,
    pub infants: usize,
    pub children: usize,
    pub adults: usize,
    pub seniors: usize,
}

impl BreakdownSummary {
    pub fn from_visitors(visitors: &[Visitor]) -> Self {
        let mut summary = Self::default();
        for visitor in visitors {
            match visitor.pass_type {
                PassType::Regular => summary.regular += 1,
                PassType::Vip => summary.vip += 1,
            }
            match visitor.age_bracket() {
                Some(AgeBracket::Infant) => summary.infants += 1,
                Some(AgeBracket::Child) => summary.children += 1,
                Some(AgeBracket::Adult) => summary.adults += 1,
                Some(AgeBracket::Senior) => summary.seniors += 1,
                None => {}
            }
        }
        summary
    }

    pub fn count_for(&self, bracket: AgeBracket) -> usize {
        match bracket {
            AgeBracket::Infant => self.infants,
            AgeBracket::Child => self.children,
            AgeBracket::Adult => self.adults,
            AgeBracket::Senior => self.seniors,
        }
    }
}

/// Everything the confirmation needs to know about a purchase
#[derive(Debug, Clone, Copy)]
pub struct PurchaseSummary<'a> {
    pub buyer_email: &'a str,
    pub visit_date: NaiveDate,
    pub visitors: &'a [Visitor],
    pub total: Decimal,
    pub currency: &'a str,
    pub payment_method: PaymentMethod,
    /// Checkout link, absent when the card payment could not be started
    pub payment_redirect_url: Option<&'a str>,
}

/// Email ready to hand to a notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationEmail {
    pub subject: String,
    pub body: String,
}

/// One-line summary stored on the purchase result
pub fn confirmation_message(summary: &PurchaseSummary<'_>) -> String {
    format!(
        "Compra confirmada: {} entradas para {}.",
        summary.visitors.len(),
        summary.visit_date.format("%Y-%m-%d")
    )
}

pub fn email_subject(visit_date: NaiveDate) -> String {
    format!(
        "Confirmación de tu compra para EcoHarmony Park (Fecha: {})",
        visit_date.format("%d/%m/%Y")
    )
}

fn payment_info(summary: &PurchaseSummary<'_>) -> String {
    let amount = format!(
        "<strong>{} {}</strong>",
        format_amount(summary.total),
        escape_html(summary.currency)
    );
    match (summary.payment_method, summary.payment_redirect_url) {
        (PaymentMethod::Card, Some(_)) => {
            format!("Se ha procesado un pago de {} con tu tarjeta.", amount)
        }
        (PaymentMethod::Card, None) => format!(
            "No pudimos iniciar el pago de {} con tu tarjeta. No se realizó ningún cobro: \
             por favor, abónalo en la boletería del parque el día de tu visita o comunícate con nosotros.",
            amount
        ),
        _ => format!(
            "Por favor, recuerda abonar {} en la boletería del parque el día de tu visita.",
            amount
        ),
    }
}

impl ConfirmationEmail {
    pub fn compose(summary: &PurchaseSummary<'_>) -> Self {
        let breakdown = BreakdownSummary::from_visitors(summary.visitors);

        let brackets: String = AgeBracket::ALL
            .iter()
            .map(|bracket| {
                format!(
                    "        <li>{}: <strong>{}</strong> ({})</li>\n",
                    bracket.label(),
                    breakdown.count_for(*bracket),
                    bracket.payment_rule()
                )
            })
            .collect();

        let body = format!(
            r#"<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6;">
  <div style="width: 90%; margin: auto; padding: 20px;">
    <h1 style="font-size: 24px; color: #134611;">¡Tu visita a EcoHarmony Park está confirmada!</h1>
    <p>Hola {buyer},</p>
    <p>Gracias por elegirnos. Aquí están los detalles de tu compra:</p>
    <p>{message}</p>
    <hr>
    <p><strong>Fecha de visita:</strong> {long_date}</p>
    <p><strong>Monto Total:</strong> {total} {currency}</p>
    <p><strong>Total de Entradas:</strong> {count}</p>
    <p><strong>Detalle de pases:</strong></p>
    <ul>
        <li>Entradas Regulares: <strong>{regular}</strong></li>
        <li>Entradas VIP: <strong>{vip}</strong></li>
    </ul>
    <p><strong>Desglose por edad:</strong></p>
    <ul>
{brackets}    </ul>
    <hr>
    <p>{payment}</p>
    <p>¡Te esperamos para que disfrutes de una experiencia inolvidable!</p>
    <p><em>El equipo de EcoHarmony Park</em></p>
  </div>
</body>
</html>
"#,
            buyer = escape_html(summary.buyer_email.trim()),
            message = escape_html(&confirmation_message(summary)),
            long_date = long_date(summary.visit_date),
            total = format_amount(summary.total),
            currency = escape_html(summary.currency),
            count = summary.visitors.len(),
            regular = breakdown.regular,
            vip = breakdown.vip,
            brackets = brackets,
            payment = payment_info(summary),
        );

        Self {
            subject: email_subject(summary.visit_date),
            body,
        }
    }
}

/// `$15,000.00`
pub fn format_amount(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.round_dp(2));
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{}", sign, grouped, frac_part)
}

/// "sábado, 14 de marzo de 2026"
fn long_date(date: NaiveDate) -> String {
    const MONTHS: [&str; 12] = [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ];
    let weekday = match date.weekday() {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    };
    format!(
        "{}, {:02} de {} de {}",
        weekday,
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
