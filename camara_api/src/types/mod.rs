mod de;

mod meta;
pub use self::meta::{Link, Page, Relation};

mod bloc;
pub use self::bloc::Bloc;

mod legislator;
pub use self::legislator::{
    Expense, Legislator, LegislatorDetail, LegislatorEvent, LegislatorOrgan, LegislatorStatus,
    Occupation, Office, Profession, Speech,
};

mod event;
pub use self::event::{AgendaItem, Event, EventDetail, EventPhase, Requirement, Venue};

mod front;
pub use self::front::{Front, FrontCoordinator, FrontDetail, FrontMember};

mod legislature;
pub use self::legislature::{BoardMember, Legislature, LegislatureLeader};

mod organ;
pub use self::organ::{OrganDetail, OrganMember, OrganSummary};

mod party;
pub use self::party::{Party, PartyDetail, PartyLeader, PartyLeaderSummary, PartyStatus};

mod bill;
pub use self::bill::{Bill, BillAuthor, BillDetail, BillStatus, BillTheme, RelatedBill};

mod vote;
pub use self::vote::{Ballot, BillPresentation, Orientation, RecordedEffect, Vote, VoteDetail};
