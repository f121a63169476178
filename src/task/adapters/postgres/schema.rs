//! Diesel schema for task persistence.

diesel::table! {
    /// Task records with derived quadrant classification.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning user, when the deployment is multi-user.
        owner_id -> Nullable<Uuid>,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional long-form description.
        description -> Nullable<Text>,
        /// Caller-supplied importance flag.
        is_important -> Bool,
        /// Urgency flag derived from the deadline at the last write.
        is_urgent -> Bool,
        /// Optional deadline.
        deadline_at -> Nullable<Timestamptz>,
        /// Derived Eisenhower quadrant label.
        #[max_length = 2]
        quadrant -> Varchar,
        /// Completion flag.
        completed -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Completion timestamp, set once.
        completed_at -> Nullable<Timestamptz>,
    }
}
