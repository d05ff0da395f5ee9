use portal_model::{
    BillingSummary, ChargeKind, Frequency, Invoice, InvoiceStatus, MethodShare, MonthTotals,
    Payment, PaymentMethod, PaymentStatus, PaymentSummary, RecurringBill,
};

use super::date;

const SARAH: (&str, &str, &str) = ("Sarah Johnson", "Unit 4B", "Sunset Apartments");
const MICHAEL: (&str, &str, &str) = ("Michael Rodriguez", "Unit 2A", "Riverside Condos");
const ALEX: (&str, &str, &str) = ("Alex Chen", "Unit 7C", "Garden View Townhomes");

fn invoice(
    id: &str,
    (tenant, unit, property): (&str, &str, &str),
    amount: u64,
    kind: ChargeKind,
    due: (i32, u32, u32),
    status: InvoiceStatus,
) -> Invoice {
    Invoice {
        id: id.to_string(),
        tenant: tenant.to_string(),
        unit: unit.to_string(),
        property: property.to_string(),
        amount,
        kind,
        due_date: date(due.0, due.1, due.2),
        status,
        paid_date: None,
    }
}

pub fn invoices() -> Vec<Invoice> {
    let mut paid = invoice(
        "INV-001",
        SARAH,
        1800,
        ChargeKind::Rent,
        (2024, 2, 1),
        InvoiceStatus::Paid,
    );
    paid.paid_date = Some(date(2024, 1, 28));
    vec![
        paid,
        invoice("INV-002", MICHAEL, 2200, ChargeKind::Rent, (2024, 2, 1), InvoiceStatus::Overdue),
        invoice("INV-003", ALEX, 2000, ChargeKind::Rent, (2024, 2, 1), InvoiceStatus::Pending),
        invoice("INV-004", SARAH, 150, ChargeKind::Utilities, (2024, 2, 15), InvoiceStatus::Pending),
    ]
}

pub fn recurring_bills() -> Vec<RecurringBill> {
    [("RB-001", SARAH, 1800), ("RB-002", MICHAEL, 2200)]
        .into_iter()
        .map(|(id, (tenant, unit, property), amount)| RecurringBill {
            id: id.to_string(),
            tenant: tenant.to_string(),
            unit: unit.to_string(),
            property: property.to_string(),
            amount,
            kind: ChargeKind::Rent,
            frequency: Frequency::Monthly,
            next_due: date(2024, 3, 1),
            active: true,
        })
        .collect()
}

pub fn billing_summary() -> BillingSummary {
    BillingSummary {
        total_invoiced: 45_600,
        total_paid: 38_400,
        total_pending: 4_200,
        total_overdue: 3_000,
        this_month: MonthTotals {
            invoiced: 12_800,
            paid: 10_600,
            pending: 2_200,
        },
    }
}

pub fn payments() -> Vec<Payment> {
    [
        ("PAY-001", SARAH, 1800, ChargeKind::Rent, PaymentMethod::BankTransfer, (2024, 1, 28), PaymentStatus::Completed, "TXN123456"),
        ("PAY-002", ALEX, 2000, ChargeKind::Rent, PaymentMethod::CreditCard, (2024, 1, 30), PaymentStatus::Completed, "TXN123457"),
        ("PAY-003", MICHAEL, 2200, ChargeKind::Rent, PaymentMethod::Check, (2024, 2, 1), PaymentStatus::Pending, "CHK001"),
        ("PAY-004", SARAH, 150, ChargeKind::LateFee, PaymentMethod::CreditCard, (2024, 2, 2), PaymentStatus::Failed, "TXN123458"),
    ]
    .into_iter()
    .map(|(id, (tenant, unit, property), amount, kind, method, (y, m, d), status, reference)| Payment {
        id: id.to_string(),
        tenant: tenant.to_string(),
        unit: unit.to_string(),
        property: property.to_string(),
        amount,
        kind,
        method,
        date: date(y, m, d),
        status,
        reference: reference.to_string(),
    })
    .collect()
}

pub fn payment_methods() -> Vec<MethodShare> {
    [
        (PaymentMethod::BankTransfer, 45, 60, 67_500),
        (PaymentMethod::CreditCard, 25, 33, 37_500),
        (PaymentMethod::Check, 5, 7, 7_500),
    ]
    .into_iter()
    .map(|(method, count, percentage, total_amount)| MethodShare {
        method,
        count,
        percentage,
        total_amount,
    })
    .collect()
}

pub fn payment_summary() -> PaymentSummary {
    PaymentSummary {
        total_received: 112_500,
        this_month: 28_400,
        pending: 4_200,
        failed: 350,
        average_payment_days: 2.3,
        collection_rate: 94.2,
    }
}
