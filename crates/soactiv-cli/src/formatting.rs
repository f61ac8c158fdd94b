use chrono::NaiveDate;

use soactiv_domain::{Client, Enquiry, Staff};
use soactiv_membership::{
    Classification, Classify, EnquiryPipeline, MembershipSummary, StaffSummary,
    EXPIRY_WINDOW_DAYS,
};

pub trait PrintFormatted {
    fn print_formatted(&self);
}

fn or_none(value: Option<impl ToString>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "None".to_string(),
    }
}

/// Remaining days as shown in the client table.
pub fn remaining_label(classification: &Classification) -> String {
    match classification.remaining_days {
        None => "-".to_string(),
        Some(days) if days <= 0 => "Expired".to_string(),
        Some(1) => "1 day".to_string(),
        Some(days) => format!("{} days", days),
    }
}

impl PrintFormatted for (&Client, Classification) {
    fn print_formatted(&self) {
        let (client, classification) = self;

        println!("Name:\t\t\t{}", client.full_name);
        println!("Gender:\t\t\t{}", client.gender);
        println!("Phone:\t\t\t{}", client.phone);
        println!("Email:\t\t\t{}", client.email);
        println!("Date of Birth:\t\t{}", or_none(client.date_of_birth));
        println!("Address:\t\t{}", client.address);
        match &client.emergency_contact {
            Some(contact) => println!(
                "Emergency Contact:\t{} ({}, {})",
                contact.name, contact.relationship, contact.phone
            ),
            None => println!("Emergency Contact:\tNone"),
        }
        println!("Start:\t\t\t{}", or_none(client.start_date));
        println!("End:\t\t\t{}", or_none(client.end_date));
        println!("Remaining:\t\t{}", remaining_label(classification));
        println!("Status:\t\t\t{}", classification.status);
        println!("Sales Rep:\t\t{}", client.sales_rep);
        println!("Member Manager:\t\t{}", client.member_manager);
        println!("Trainer:\t\t{}", or_none(client.trainer.as_ref()));
        println!("Attendance ID:\t\t{}", client.attendance_id);
        println!("Club ID:\t\t{}", client.club_id);
        println!("GST No:\t\t\t{}", or_none(client.gst_no.as_ref()));
        println!("Notifications:\t\t{}", client.notifications.channels().join(", "));
    }
}

/// Clients as a table, classified at `reference`.
pub struct ClientRows<'a> {
    pub clients: &'a [Client],
    pub reference: NaiveDate,
}

impl PrintFormatted for ClientRows<'_> {
    fn print_formatted(&self) {
        println!(
            "{:>4}\t{:<24}\t{:<16}\t{:<30}\t{:<10}\t{:<10}\t{:>10}\t{}",
            "ID", "Name", "Phone", "Email", "Start", "End", "Remaining", "Status"
        );
        println!("{:-<150}", "-");

        for client in self.clients {
            let classification = client.classify(self.reference);
            println!(
                "{:>4}\t{:<24}\t{:<16}\t{:<30}\t{:<10}\t{:<10}\t{:>10}\t{}",
                client.id,
                client.full_name,
                client.phone,
                client.email,
                or_none(client.start_date),
                or_none(client.end_date),
                remaining_label(&classification),
                classification.status,
            );
        }
    }
}

pub struct MembershipAlerts<'a, 'b> {
    pub summary: &'b MembershipSummary<'a>,
    pub reference: NaiveDate,
}

impl PrintFormatted for MembershipAlerts<'_, '_> {
    fn print_formatted(&self) {
        let summary = self.summary;
        if summary.expiring_list.is_empty() && summary.expired_list.is_empty() {
            println!("No memberships need attention.");
            return;
        }

        if !summary.expiring_list.is_empty() {
            println!(
                "{} member(s) expiring in {} days. Consider reaching out for renewals.",
                summary.expiring, EXPIRY_WINDOW_DAYS
            );
            for client in &summary.expiring_list {
                let label = remaining_label(&client.classify(self.reference));
                println!("  {:<24}\t{:<16}\t{}", client.full_name, client.phone, label);
            }
        }
        if !summary.expired_list.is_empty() {
            println!(
                "{} member(s) have expired. Follow up for renewals or account updates.",
                summary.expired
            );
            for client in &summary.expired_list {
                println!(
                    "  {:<24}\t{:<16}\t{}",
                    client.full_name,
                    client.phone,
                    or_none(client.end_date)
                );
            }
        }
    }
}

impl PrintFormatted for Staff {
    fn print_formatted(&self) {
        println!("Name:\t\t\t{}", self.name);
        println!("Designation:\t\t{}", self.designation);
        println!("Phone:\t\t\t{}", self.phone);
        println!("Email:\t\t\t{}", self.email);
        println!("Joined:\t\t\t{}", self.joining_date);
        println!("Salary:\t\t\t{:.2}", self.salary);
        println!("Status:\t\t\t{}", self.status);
    }
}

impl PrintFormatted for Vec<Staff> {
    fn print_formatted(&self) {
        println!(
            "{:>4}\t{:<24}\t{:<20}\t{:<16}\t{:<24}\t{:<10}\t{:>10}\t{}",
            "ID", "Name", "Designation", "Phone", "Email", "Joined", "Salary", "Status"
        );
        println!("{:-<150}", "-");
        for staff in self {
            println!(
                "{:>4}\t{:<24}\t{:<20}\t{:<16}\t{:<24}\t{:<10}\t{:>10.2}\t{}",
                staff.id,
                staff.name,
                staff.designation,
                staff.phone,
                staff.email,
                staff.joining_date,
                staff.salary,
                staff.status,
            );
        }
    }
}

impl PrintFormatted for Enquiry {
    fn print_formatted(&self) {
        println!("Name:\t\t\t{}", self.name);
        println!("Contact:\t\t{}", self.contact);
        println!("Email:\t\t\t{}", or_none(self.email.as_ref()));
        println!("Status:\t\t\t{}", self.status);
        println!("Assigned:\t\t{}", self.assigned_staff);
        println!("Date:\t\t\t{}", self.date);
        println!("Follow-up:\t\t{}", self.follow_up_date);
        println!("Source:\t\t\t{}", self.source);
        println!("Comments:\t\t{}", self.comments);
    }
}

impl PrintFormatted for Vec<Enquiry> {
    fn print_formatted(&self) {
        println!(
            "{:>4}\t{:<24}\t{:<16}\t{:<24}\t{:<10}\t{:<20}\t{:<10}\t{}",
            "ID", "Name", "Contact", "Email", "Status", "Assigned", "Follow-up", "Source"
        );
        println!("{:-<150}", "-");
        for enquiry in self {
            println!(
                "{:>4}\t{:<24}\t{:<16}\t{:<24}\t{:<10}\t{:<20}\t{:<10}\t{}",
                enquiry.id,
                enquiry.name,
                enquiry.contact,
                enquiry.email.as_deref().unwrap_or("-"),
                enquiry.status,
                enquiry.assigned_staff,
                enquiry.follow_up_date,
                enquiry.source,
            );
        }
    }
}

pub struct Dashboard<'a> {
    pub reference: NaiveDate,
    pub memberships: MembershipSummary<'a>,
    pub staff: StaffSummary,
    pub enquiries: EnquiryPipeline<'a>,
}

impl PrintFormatted for Dashboard<'_> {
    fn print_formatted(&self) {
        println!("Dashboard for {}", self.reference.format("%A, %B %-d %Y"));
        println!();

        let m = &self.memberships;
        println!("Memberships");
        println!("  Active:\t\t{}", m.active);
        println!("  Expiring:\t\t{}", m.expiring);
        println!("  Expired:\t\t{}", m.expired);
        println!("  Pending:\t\t{}", m.pending);
        println!("  Total:\t\t{}", m.total());
        println!();

        let s = &self.staff;
        println!("Staff");
        println!("  Active:\t\t{} of {}", s.active, s.total);
        println!("  Trainers:\t\t{}", s.trainers);
        println!("  Payroll:\t\t{:.2}", s.payroll);
        println!();

        println!("Enquiries");
        for (status, count) in &self.enquiries.by_status {
            println!("  {:<12}\t\t{}", status, count);
        }
        println!("  Follow-ups due:\t{}", self.enquiries.follow_ups_due.len());
        for enquiry in &self.enquiries.follow_ups_due {
            println!(
                "    {:<24}\t{}\t{}",
                enquiry.name, enquiry.follow_up_date, enquiry.assigned_staff
            );
        }
    }
}
