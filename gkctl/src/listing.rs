use chrono::{DateTime, Utc};
use gkcore::serial::SerialRecord;
use gkpolicy::Gatekeeper;
use std::fmt::{
    Display,
    Formatter,
    Result,
};

/// Which gated columns a listing shows.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Columns {
    /// For independently gated records.
    #[default]
    Basic,
    /// For records where only one may be live at a time.
    Serial,
}

impl Columns {
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Columns::Basic => &["id", "status", "phase", "public"],
            Columns::Serial => &["id", "status", "phase", "live", "default"],
        }
    }
}

/// A tab separated listing of records and their gated state.
pub struct Listing<'a> {
    gatekeeper: &'a Gatekeeper,
    records: &'a [SerialRecord],
    columns: Columns,
    now: DateTime<Utc>,
}

fn flag(val: bool) -> String {
    let flag = if val { "yes" } else { "no" };
    flag.to_string()
}

impl<'a> Listing<'a> {
    pub fn new(
        gatekeeper: &'a Gatekeeper,
        records: &'a [SerialRecord],
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            gatekeeper,
            records,
            columns: Columns::default(),
            now,
        }
    }

    pub fn columns(mut self, val: Columns) -> Self {
        self.columns = val;
        self
    }

    fn row(&self, record: &SerialRecord) -> Vec<String> {
        let mut row = vec![
            record.id.to_string(),
            record.state.status.to_string(),
            record.state.phase(self.now).to_string(),
        ];
        match self.columns {
            Columns::Basic => {
                row.push(flag(self.gatekeeper.is_visible_to_public(Some(record), self.now)));
            }
            Columns::Serial => {
                row.push(flag(self.gatekeeper.is_live(self.records, record, self.now)));
                row.push(flag(record.default_live));
            }
        }
        row
    }
}

impl Display for Listing<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "{}", self.columns.headers().join("\t"))?;
        for record in self.records.iter() {
            writeln!(f, "{}", self.row(record).join("\t"))?;
        }
        Ok(())
    }
}
