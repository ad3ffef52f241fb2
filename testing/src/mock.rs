use gkcore::{
    publish::PublishState,
    traits::ParentLookup,
};
use mockall::mock;

mock! {
    pub ParentLookup {}
    impl ParentLookup for ParentLookup {
        fn parent_state(&self, child_id: i64) -> Option<PublishState>;
    }
}
